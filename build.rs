//! Build script for grocer
//!
//! Stamps each compile with an incrementing build number and a UTC
//! timestamp, embedded via rustc-env for src/build_info.rs to pick up.

use std::fs;
use std::path::Path;

fn main() {
    // Rerun on source changes only, not on every cargo invocation
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new("build_number.txt");

    // Missing or malformed counter file restarts the count
    let previous: u64 = fs::read_to_string(counter_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    fs::write(counter_path, build_number.to_string())
        .expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=GROCER_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=GROCER_BUILD_TIMESTAMP={}", timestamp);

    // Surface the stamp in the build log
    println!("cargo:warning=Grocer Build #{} at {}", build_number, timestamp);
}
