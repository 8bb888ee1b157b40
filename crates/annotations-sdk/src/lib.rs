// annotations-sdk: Foundation layer for the CI annotation reporter.
// This crate has ZERO dependencies on other workspace crates and provides
// the diagnostics abstraction and build metadata used throughout the tool.

pub mod build_constants;
pub mod string_util;
pub mod trace;

// Re-export commonly used items at crate root
pub use build_constants::{ReporterPackage, Source};
pub use string_util::StringUtil;
pub use trace::{CollectingTraceWriter, TraceLevel, TraceWriter, TracingTraceWriter};
