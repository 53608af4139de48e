//! Public booking lookup.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use reqwest::StatusCode;

use autorent_integration_tests::{TestApp, body, location};

#[tokio::test]
async fn submitted_reference_is_normalized_into_path() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/track", &[("reference", "  ar-2026-cbvs ")]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/track/AR-2026-CBVS"));
}

#[tokio::test]
async fn blank_reference_stays_on_form() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/track", &[("reference", "   ")]).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body(resp).await.contains("Please enter your booking reference number"));
}

#[tokio::test]
async fn known_reference_shows_booking() {
    let app = TestApp::spawn().await;

    let resp = app.get("/track/AR-2026-CBVS").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body(resp).await;
    assert!(html.contains("Toyota Land Cruiser 2024"));
    assert!(html.contains("Coastal Highlights"));
    assert!(html.contains("Confirmed"));
}

#[tokio::test]
async fn lowercase_path_redirects_to_canonical() {
    let app = TestApp::spawn().await;

    let resp = app.get("/track/ar-2026-k7td").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/track/AR-2026-K7TD"));
}

#[tokio::test]
async fn unknown_reference_is_not_found() {
    let app = TestApp::spawn().await;

    let resp = app.get("/track/AR-2026-ZZZZ").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body(resp).await;
    assert!(html.contains("Booking not found"));
    assert!(html.contains("AR-2026-ZZZZ"));
}

#[tokio::test]
async fn lookup_works_without_signing_in() {
    let app = TestApp::spawn().await;

    let resp = app.get("/track").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body(resp).await.contains("/static/js/derived/track."));
}
