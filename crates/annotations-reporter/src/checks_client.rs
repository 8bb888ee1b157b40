// ChecksClient: REST client for the workflow jobs and check run annotations
// endpoints.
//
// API calls implemented:
//   1. GET repos/{owner}/{repo}/actions/runs/{run_id}/jobs
//   2. GET repos/{owner}/{repo}/check-runs/{check_run_id}/annotations
//
// Each path parameter is percent-encoded as a single segment. Non-success
// statuses become `ReporterError::Http` and are not retried.

use anyhow::{anyhow, bail, Context, Result};
use annotations_common::constants::api;
use annotations_common::{HttpClientFactory, ReporterError};
use annotations_sdk::string_util::{StringUtil, MAX_LOGGED_BODY};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::models::{Annotation, Job, JobsResponse};
use crate::run_config::{Repository, RunConfig};

/// The two reads the reporter needs from the CI platform.
#[async_trait]
pub trait ChecksApi: Send + Sync {
    /// List the jobs of a workflow run. `None` when the response carries no
    /// jobs collection.
    async fn list_jobs_for_run(
        &self,
        repository: &Repository,
        run_id: &str,
    ) -> Result<Option<Vec<Job>>>;

    /// List the annotations of a check run. `None` when the body is `null`.
    async fn list_annotations_for_check_run(
        &self,
        repository: &Repository,
        check_run_id: u64,
    ) -> Result<Option<Vec<Annotation>>>;
}

/// `ChecksApi` over HTTP.
pub struct ChecksClient {
    /// Base URL ending in `/`.
    base_url: Url,
    client: reqwest::Client,
}

impl ChecksClient {
    pub fn new(base_url: Url, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    /// Build a client with the token and API URL from the run configuration.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        let client = HttpClientFactory::create_client(&config.token)?;
        Ok(Self::new(config.api_url.clone(), client))
    }

    /// Append `segments` to the base URL, encoding `/`, `?`, `#` and `%` inside
    /// each one. Empty and dot segments are refused since the URL parser would
    /// drop them and address a different resource.
    fn request_url(&self, segments: &[String]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| matches!(s.as_str(), "" | "." | ".."))
        {
            bail!("Invalid path segment '{bad}' in request for {}", segments.join("/"));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL '{}' cannot be a base", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[String]) -> Result<T> {
        let url = self.request_url(segments)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to send GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReporterError::Http {
                url: url.to_string(),
                status,
                body: StringUtil::truncate(&body, MAX_LOGGED_BODY),
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response of GET {url}"))
    }
}

#[async_trait]
impl ChecksApi for ChecksClient {
    async fn list_jobs_for_run(
        &self,
        repository: &Repository,
        run_id: &str,
    ) -> Result<Option<Vec<Job>>> {
        let segments = api::run_jobs_segments(&repository.owner, &repository.name, run_id);
        let response: JobsResponse = self.get_json(&segments).await?;
        Ok(response.jobs)
    }

    async fn list_annotations_for_check_run(
        &self,
        repository: &Repository,
        check_run_id: u64,
    ) -> Result<Option<Vec<Annotation>>> {
        let segments = api::check_run_annotations_segments(
            &repository.owner,
            &repository.name,
            check_run_id,
        );
        self.get_json(&segments).await
    }
}
