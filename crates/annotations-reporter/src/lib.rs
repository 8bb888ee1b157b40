// annotations-reporter: prints the warning and error annotations attached to
// the jobs of a workflow run. Depends on `annotations-sdk` and `annotations-common`.
//
// Architecture:
//   main → CommandSettings → app::run → RunConfig::from_settings → ChecksClient
//        → Reporter::run → list jobs → per job: list annotations → filter → stdout

pub mod app;
pub mod checks_client;
pub mod command_settings;
pub mod models;
pub mod reporter;
pub mod run_config;

pub use checks_client::{ChecksApi, ChecksClient};
pub use command_settings::CommandSettings;
pub use models::{Annotation, Job, JobsResponse};
pub use reporter::{ReportSummary, Reporter};
pub use run_config::{Repository, RunConfig};
