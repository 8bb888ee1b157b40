// annotations-common: Shared infrastructure for the CI annotation reporter.
// Depends on `annotations-sdk`.

pub mod constants;
pub mod exceptions;
pub mod http_client_factory;
pub mod logging;

// ---------------------------------------------------------------------------
// Re-exports for convenient access
// ---------------------------------------------------------------------------

pub use constants::{return_code, REPORTED_LEVELS};
pub use exceptions::ReporterError;
pub use http_client_factory::HttpClientFactory;
