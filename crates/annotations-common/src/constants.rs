// Well-known constants for the annotation reporter.
// Environment variable names, API routes, headers, report levels and exit codes.

// ---------------------------------------------------------------------------
// Environment variables
// ---------------------------------------------------------------------------

/// Environment variables read at startup.
pub mod variables {
    /// API access token.
    pub const TOKEN: &str = "GH_TOKEN";
    /// Workflow run to inspect.
    pub const RUN_ID: &str = "workflow_id";
    /// `owner/repo` slug.
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
    /// REST API base URL (GitHub Enterprise Server sets this).
    pub const API_URL: &str = "GITHUB_API_URL";
    /// Number of annotation fetches allowed in flight.
    pub const CONCURRENCY: &str = "ANNOTATIONS_CONCURRENCY";
}

// ---------------------------------------------------------------------------
// REST API
// ---------------------------------------------------------------------------

/// REST API routes and headers.
pub mod api {
    /// Default public API endpoint.
    pub const DEFAULT_URL: &str = "https://api.github.com";

    /// `Accept` header value for JSON responses.
    pub const MEDIA_TYPE: &str = "application/vnd.github+json";

    /// Header naming the REST API version.
    pub const VERSION_HEADER: &str = "x-github-api-version";

    /// REST API version requested.
    pub const VERSION: &str = "2022-11-28";

    /// Path segments, below the API base URL, listing the jobs of a workflow run.
    pub fn run_jobs_segments(owner: &str, repo: &str, run_id: &str) -> Vec<String> {
        ["repos", owner, repo, "actions", "runs", run_id, "jobs"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Path segments, below the API base URL, listing the annotations of a check run.
    pub fn check_run_annotations_segments(owner: &str, repo: &str, check_run_id: u64) -> Vec<String> {
        let id = check_run_id.to_string();
        ["repos", owner, repo, "check-runs", id.as_str(), "annotations"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Annotation levels
// ---------------------------------------------------------------------------

/// Annotation levels that get reported. Compared case-insensitively.
pub const REPORTED_LEVELS: &[&str] = &["warning", "error"];

// ---------------------------------------------------------------------------
// ReturnCode
// ---------------------------------------------------------------------------

/// Process return / exit codes.
pub mod return_code {
    pub const SUCCESS: i32 = 0;
    pub const TERMINATED_ERROR: i32 = 1;
}
