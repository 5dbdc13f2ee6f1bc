fn main() {
    let now = chrono::Utc::now();

    // Surfaced in the footer copyright line via env!
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    println!("cargo:rerun-if-changed=build.rs");
}
