// CommandSettings: command-line flags, each with an environment variable fallback.
//
// Every value is optional at parse time. Presence is checked afterwards by
// `RunConfig::from_settings` so that the first missing value is reported with
// the same message whether it came from a flag or the environment.

use std::num::NonZeroUsize;

use annotations_common::constants::variables;
use clap::Parser;

/// Parsed command settings from CLI arguments and environment variables.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "annotations",
    version,
    about = "Print the warning and error annotations of a workflow run's jobs"
)]
pub struct CommandSettings {
    /// API access token.
    #[arg(long, env = variables::TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Workflow run id whose jobs are inspected.
    #[arg(long = "run-id", env = variables::RUN_ID)]
    pub run_id: Option<String>,

    /// Repository in `owner/repo` form.
    #[arg(long, env = variables::REPOSITORY)]
    pub repository: Option<String>,

    /// REST API base URL.
    #[arg(long = "api-url", env = variables::API_URL)]
    pub api_url: Option<String>,

    /// Maximum number of annotation requests in flight. Output order does not
    /// depend on this value.
    #[arg(long, env = variables::CONCURRENCY, default_value = "1")]
    pub concurrency: NonZeroUsize,
}
