// Response models for the two REST calls.

use annotations_common::REPORTED_LEVELS;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One job of a workflow run. The job id doubles as its check run id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `GET /repos/{owner}/{repo}/actions/runs/{run_id}/jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobsResponse {
    /// `None` when the field is missing or `null`.
    #[serde(default)]
    pub jobs: Option<Vec<Job>>,
}

/// A check run annotation, kept as the raw JSON object so every field the API
/// returns is printed back unchanged and in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation {
    fields: Map<String, Value>,
}

impl Annotation {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The `annotation_level` field, if present and a string.
    pub fn level(&self) -> Option<&str> {
        self.fields.get("annotation_level").and_then(Value::as_str)
    }

    /// Whether the level is `warning` or `error`, ignoring case.
    pub fn is_reportable(&self) -> bool {
        self.level().is_some_and(|level| {
            REPORTED_LEVELS
                .iter()
                .any(|reported| level.eq_ignore_ascii_case(reported))
        })
    }
}
