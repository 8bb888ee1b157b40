/// Build constants for the reporter package.
/// Values come from compile-time environment variables with defaults.

/// Source control information.
pub struct Source;

impl Source {
    /// The commit hash from which this binary was built.
    /// Set via the `ANNOTATIONS_COMMIT_HASH` env var at compile time, or "N/A".
    pub const COMMIT_HASH: &'static str = match option_env!("ANNOTATIONS_COMMIT_HASH") {
        Some(h) => h,
        None => "N/A",
    };
}

/// Reporter package metadata.
#[derive(Debug, Clone)]
pub struct ReporterPackage;

impl ReporterPackage {
    /// The semantic version of the reporter.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Product name sent in the `User-Agent` header.
    pub const PRODUCT_NAME: &'static str = "ci-annotations";

    /// `User-Agent` value for API requests, e.g. `ci-annotations/0.1.0`.
    pub fn user_agent() -> String {
        format!("{}/{}", Self::PRODUCT_NAME, Self::VERSION)
    }
}
