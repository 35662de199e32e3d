use chrono::Datelike;

/// Compile-time overrides read through `option_env!` in `src/config.rs`.
const CONFIG_VARS: [&str; 6] = [
    "PORTFOLIO_THEME_STORAGE_KEY",
    "PORTFOLIO_DEFAULT_THEME",
    "PORTFOLIO_EMAILJS_ENDPOINT",
    "PORTFOLIO_EMAILJS_SERVICE_ID",
    "PORTFOLIO_EMAILJS_TEMPLATE_ID",
    "PORTFOLIO_EMAILJS_PUBLIC_KEY",
];

fn main() {
    // footer copyright year
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
