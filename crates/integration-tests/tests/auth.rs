//! Login and registration forms.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use reqwest::StatusCode;

use autorent_integration_tests::{TestApp, body, location};

#[tokio::test]
async fn wrong_password_shows_message_and_keeps_phone() {
    let app = TestApp::spawn().await;

    let resp = app.login(("+15550102030", "not-the-password")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let html = body(resp).await;
    assert!(html.contains("Invalid phone number or password"));
    assert!(html.contains(r#"value="+15550102030""#));
}

#[tokio::test]
async fn malformed_phone_is_rejected_before_the_oracle() {
    let app = TestApp::spawn().await;

    let resp = app.login(("call me", "customer-demo")).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body(resp).await.contains("Please enter a valid phone number"));
}

#[tokio::test]
async fn registration_signs_in_new_customer() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/register",
            &[
                ("full_name", "Mei Tanaka"),
                ("email", "mei@example.org"),
                ("phone", "+15550107777"),
                ("password", "long-enough-1"),
                ("password_confirm", "long-enough-1"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/customer/dashboard"));

    let html = body(app.get("/customer/dashboard").await).await;
    assert!(html.contains("Welcome back, Mei"));
    assert!(html.contains("No upcoming trips"));
}

#[tokio::test]
async fn registration_with_mismatched_passwords_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/register",
            &[
                ("full_name", "Mei Tanaka"),
                ("email", "mei@example.org"),
                ("phone", "+15550107777"),
                ("password", "long-enough-1"),
                ("password_confirm", "long-enough-2"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body(resp).await;
    assert!(html.contains("Passwords do not match"));
    assert!(html.contains(r#"value="Mei Tanaka""#));
}

#[tokio::test]
async fn registration_with_malformed_email_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form(
            "/register",
            &[
                ("full_name", "Mei Tanaka"),
                ("email", "mei@example@org"),
                ("phone", "+15550107777"),
                ("password", "long-enough-1"),
                ("password_confirm", "long-enough-1"),
            ],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body(resp).await.contains("Please enter a valid email address"));

    // No account was created under that phone number.
    let resp = app.login(("+15550107777", "long-enough-1")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn credential_posts_are_rate_limited() {
    let app = TestApp::spawn().await;

    let mut statuses = Vec::new();
    for _ in 0..8 {
        statuses.push(app.login(("+15550102030", "wrong")).await.status());
    }
    assert!(statuses.iter().take(5).all(|s| *s == StatusCode::UNAUTHORIZED));
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    // Page views are not limited.
    assert_eq!(app.get("/login").await.status(), StatusCode::OK);
}
