//! Build script for the site crate.
//!
//! Fingerprints static assets so they can be served with immutable caching.
//! Each asset is copied to a `derived` directory under a hashed name and the
//! short hash is exported as a compile-time environment variable.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// (source path under `static/`, derived directory, file stem, extension, env var)
const ASSETS: &[(&str, &str, &str, &str, &str)] = &[
    ("css/main.css", "css/derived", "main", "css", "CSS_HASH"),
    ("js/track.js", "js/derived", "track", "js", "JS_HASH"),
];

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_dir = Path::new(&manifest_dir).join("static");

    for (source, derived, stem, ext, var) in ASSETS {
        fingerprint(&static_dir, source, derived, stem, ext, var);
    }
}

/// Hash one asset and copy it next to its siblings with the hash in the name.
fn fingerprint(static_dir: &Path, source: &str, derived: &str, stem: &str, ext: &str, var: &str) {
    let source_path = static_dir.join(source);
    println!("cargo:rerun-if-changed={}", source_path.display());

    let content = match fs::read(&source_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {source}: {e}");
            println!("cargo:rustc-env={var}=");
            return;
        }
    };

    let hash = format!("{:x}", Sha256::digest(&content));
    let short_hash = &hash[..8];
    println!("cargo:rustc-env={var}={short_hash}");

    let derived_dir = static_dir.join(derived);
    fs::create_dir_all(&derived_dir).expect("Failed to create derived asset directory");
    fs::copy(&source_path, derived_dir.join(format!("{stem}.{short_hash}.{ext}")))
        .expect("Failed to copy asset to derived directory");
}
