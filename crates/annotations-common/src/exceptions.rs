// Error taxonomy for the annotation reporter.

/// Errors the reporter raises itself. Transport failures from `reqwest` are
/// carried alongside these through `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum ReporterError {
    /// A required setting was absent or empty.
    #[error("The {variable} environment variable is not set.")]
    MissingConfiguration { variable: &'static str },

    /// The repository slug did not split into `owner/repo`.
    #[error("Invalid repository '{value}', expected the form 'owner/repo'.")]
    InvalidRepository { value: String },

    /// The API base URL could not be parsed.
    #[error("Invalid API URL '{value}': {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The API answered with a non-success status.
    #[error("GET {url} returned HTTP {status}: {body}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
}
