//! Compile-time build information, set by `build.rs`.

pub const BUILD_COMMIT: &str = env!("CLICKER_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("CLICKER_BUILD_DATE");

/// `typing-clicker 0.1.0 (2026-10-16, abc1234)`
pub fn version_line() -> String {
    format!(
        "typing-clicker {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
