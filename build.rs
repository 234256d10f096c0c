fn main() {
    // Local overrides; a missing .env is fine
    dotenvy::dotenv().ok();

    // Asset prefix for the deployed sub-path, empty when served from the domain root
    let base_path = std::env::var("SITE_BASE_PATH").unwrap_or_default();
    println!("cargo:rustc-env=SITE_BASE_PATH={}", base_path);

    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-env-changed=SITE_BASE_PATH");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
}
