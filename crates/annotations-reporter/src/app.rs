// Top-level flow of the `annotations` command, returning the process exit code.
//
// Settings are validated before any client exists, so a configuration error
// never reaches the network.

use std::io::Write;

use annotations_common::return_code;
use annotations_sdk::{ReporterPackage, Source, TracingTraceWriter};

use crate::checks_client::ChecksClient;
use crate::command_settings::CommandSettings;
use crate::reporter::Reporter;
use crate::run_config::RunConfig;

/// Run one report, writing it to `out`.
///
/// Returns `SUCCESS` when the report completes (including a run without
/// jobs) and `TERMINATED_ERROR` on a configuration error or API failure.
pub async fn run<W: Write>(settings: &CommandSettings, out: W) -> i32 {
    tracing::debug!(
        "annotations {} (commit {})",
        ReporterPackage::VERSION,
        Source::COMMIT_HASH
    );

    let config = match RunConfig::from_settings(settings) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return return_code::TERMINATED_ERROR;
        }
    };

    let client = match ChecksClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create API client: {:#}", e);
            return return_code::TERMINATED_ERROR;
        }
    };

    let trace = TracingTraceWriter;
    let mut reporter = Reporter::new(&client, &config, &trace, out);

    match reporter.run().await {
        Ok(summary) => {
            tracing::debug!("Report finished: {:?}", summary);
            return_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Report failed: {:#}", e);
            return_code::TERMINATED_ERROR
        }
    }
}
