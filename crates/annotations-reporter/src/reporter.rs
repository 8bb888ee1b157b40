// Reporter: lists the jobs of a run, fetches each job's check run annotations
// and writes the warning and error ones to the report output.
//
// Report output (stdout in production):
//   run ids: [101, 102]
//   info: no annotations found for job 102
//   {"path":"src/lib.rs","annotation_level":"warning",...}
//
// Diagnostics go through `TraceWriter`.

use std::io::Write;

use anyhow::{Context, Result};
use annotations_sdk::TraceWriter;
use futures::stream::{self, StreamExt};

use crate::checks_client::ChecksApi;
use crate::models::{Annotation, Job};
use crate::run_config::RunConfig;

/// Counts gathered during one report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Jobs returned for the run.
    pub jobs: usize,
    /// Annotations fetched across all jobs.
    pub annotations: usize,
    /// Annotations written to the output.
    pub reported: usize,
}

pub struct Reporter<'a, W: Write> {
    api: &'a dyn ChecksApi,
    config: &'a RunConfig,
    trace: &'a dyn TraceWriter,
    out: W,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(
        api: &'a dyn ChecksApi,
        config: &'a RunConfig,
        trace: &'a dyn TraceWriter,
        out: W,
    ) -> Self {
        Self {
            api,
            config,
            trace,
            out,
        }
    }

    /// Consume the reporter and hand back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Produce the report.
    ///
    /// A run without a jobs collection is logged as an error and yields an
    /// empty report. Annotation requests run up to `config.concurrency` at a
    /// time but results are written in job order. The first request error
    /// aborts the report.
    pub async fn run(&mut self) -> Result<ReportSummary> {
        let jobs = self.list_jobs().await?;

        let ids: Vec<u64> = jobs.iter().map(|job| job.id).collect();
        writeln!(self.out, "run ids: {:?}", ids)?;

        let mut summary = ReportSummary {
            jobs: jobs.len(),
            ..ReportSummary::default()
        };

        let api = self.api;
        let config = self.config;
        let repository = &config.repository;
        let mut fetches = stream::iter(jobs.iter())
            .map(|job| async move {
                let result = api
                    .list_annotations_for_check_run(repository, job.id)
                    .await
                    .with_context(|| format!("Failed to get annotations for job {}", job.id));
                (job, result)
            })
            .buffered(config.concurrency.get());

        while let Some((job, result)) = fetches.next().await {
            let annotations = result?.unwrap_or_default();
            self.emit(job, &annotations, &mut summary)?;
        }

        self.out.flush()?;
        self.trace.info(&format!(
            "Inspected {} job(s): {} annotation(s) fetched, {} reported",
            summary.jobs, summary.annotations, summary.reported
        ));
        Ok(summary)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let repository = &self.config.repository;
        self.trace.verbose(&format!(
            "Listing jobs of run {} in {}",
            self.config.run_id, repository
        ));

        let jobs = self
            .api
            .list_jobs_for_run(repository, &self.config.run_id)
            .await
            .with_context(|| format!("Failed to get jobs of run {}", self.config.run_id))?;

        match jobs {
            Some(jobs) => Ok(jobs),
            None => {
                self.trace.error(&format!(
                    "Error: could not get jobs for repository {}",
                    repository
                ));
                Ok(Vec::new())
            }
        }
    }

    /// Write one job's reportable annotations, or an info line when it has none.
    fn emit(
        &mut self,
        job: &Job,
        annotations: &[Annotation],
        summary: &mut ReportSummary,
    ) -> Result<()> {
        if annotations.is_empty() {
            writeln!(self.out, "info: no annotations found for job {}", job.id)?;
            return Ok(());
        }

        self.trace.verbose(&format!(
            "Job {} ({}) has {} annotation(s)",
            job.id,
            job.name.as_deref().unwrap_or("unnamed"),
            annotations.len()
        ));
        summary.annotations += annotations.len();

        for annotation in annotations.iter().filter(|a| a.is_reportable()) {
            let line = serde_json::to_string(annotation)?;
            writeln!(self.out, "{}", line)?;
            summary.reported += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_config::Repository;
    use annotations_sdk::{CollectingTraceWriter, TraceLevel};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::num::NonZeroUsize;
    use std::time::Duration;

    /// In-memory API that records every request it serves.
    #[derive(Default)]
    struct FakeChecksApi {
        jobs: Option<Vec<Job>>,
        annotations: HashMap<u64, Option<Vec<Annotation>>>,
        failing_job: Option<u64>,
        /// Per-job response delay, to shuffle completion order.
        delays: HashMap<u64, Duration>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeChecksApi {
        fn with_jobs(ids: &[u64]) -> Self {
            Self {
                jobs: Some(
                    ids.iter()
                        .map(|&id| Job {
                            id,
                            name: Some(format!("job-{id}")),
                        })
                        .collect(),
                ),
                ..Self::default()
            }
        }

        fn annotations(mut self, job_id: u64, values: Vec<Value>) -> Self {
            let list = values
                .into_iter()
                .map(|v| match v {
                    Value::Object(map) => Annotation::from_fields(map),
                    other => panic!("annotation must be an object: {other}"),
                })
                .collect();
            self.annotations.insert(job_id, Some(list));
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().clone()
        }
    }

    #[async_trait]
    impl ChecksApi for FakeChecksApi {
        async fn list_jobs_for_run(
            &self,
            repository: &Repository,
            run_id: &str,
        ) -> Result<Option<Vec<Job>>> {
            self.requests
                .lock()
                .push(format!("jobs {repository} {run_id}"));
            Ok(self.jobs.clone())
        }

        async fn list_annotations_for_check_run(
            &self,
            _repository: &Repository,
            check_run_id: u64,
        ) -> Result<Option<Vec<Annotation>>> {
            self.requests
                .lock()
                .push(format!("annotations {check_run_id}"));
            if let Some(delay) = self.delays.get(&check_run_id) {
                tokio::time::sleep(*delay).await;
            }
            if self.failing_job == Some(check_run_id) {
                anyhow::bail!("HTTP 500");
            }
            Ok(self.annotations.get(&check_run_id).cloned().flatten())
        }
    }

    fn config(concurrency: usize) -> RunConfig {
        RunConfig {
            token: "t".into(),
            run_id: "42".into(),
            repository: Repository::parse("octo/hello").unwrap(),
            api_url: url::Url::parse("https://api.github.com/").unwrap(),
            concurrency: NonZeroUsize::new(concurrency).unwrap(),
        }
    }

    async fn report(
        api: &FakeChecksApi,
        concurrency: usize,
    ) -> (Result<ReportSummary>, String, CollectingTraceWriter) {
        let config = config(concurrency);
        let trace = CollectingTraceWriter::new();
        let mut reporter = Reporter::new(api, &config, &trace, Vec::new());
        let result = reporter.run().await;
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        (result, output, trace)
    }

    #[tokio::test]
    async fn reports_warning_and_notes_job_without_annotations() {
        let api = FakeChecksApi::with_jobs(&[101, 102])
            .annotations(
                101,
                vec![json!({ "path": "src/lib.rs", "annotation_level": "warning", "message": "unused" })],
            )
            .annotations(102, vec![]);

        let (result, output, _) = report(&api, 1).await;
        let summary = result.unwrap();

        assert_eq!(
            output,
            concat!(
                "run ids: [101, 102]\n",
                r#"{"path":"src/lib.rs","annotation_level":"warning","message":"unused"}"#,
                "\n",
                "info: no annotations found for job 102\n",
            )
        );
        assert_eq!(
            summary,
            ReportSummary {
                jobs: 2,
                annotations: 1,
                reported: 1
            }
        );
    }

    #[tokio::test]
    async fn level_match_ignores_case_and_skips_notice() {
        let api = FakeChecksApi::with_jobs(&[1]).annotations(
            1,
            vec![
                json!({ "annotation_level": "Warning", "message": "a" }),
                json!({ "annotation_level": "notice", "message": "b" }),
                json!({ "annotation_level": "ERROR", "message": "c" }),
                json!({ "annotation_level": "failure", "message": "d" }),
            ],
        );

        let (result, output, _) = report(&api, 1).await;
        assert_eq!(result.unwrap().reported, 2);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "run ids: [1]",
                r#"{"annotation_level":"Warning","message":"a"}"#,
                r#"{"annotation_level":"ERROR","message":"c"}"#,
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_annotations_are_all_printed() {
        let dup = json!({ "annotation_level": "error", "message": "same" });
        let api = FakeChecksApi::with_jobs(&[1]).annotations(1, vec![dup.clone(), dup]);

        let (result, output, _) = report(&api, 1).await;
        assert_eq!(result.unwrap().reported, 2);
        assert_eq!(output.lines().count(), 3);
    }

    #[tokio::test]
    async fn missing_jobs_is_logged_and_not_fatal() {
        let api = FakeChecksApi::default();

        let (result, output, trace) = report(&api, 1).await;
        assert_eq!(result.unwrap(), ReportSummary::default());
        assert_eq!(output, "run ids: []\n");
        assert_eq!(api.requests(), vec!["jobs octo/hello 42"]);
        assert_eq!(
            trace.messages_at(TraceLevel::Error),
            vec!["Error: could not get jobs for repository octo/hello"]
        );
    }

    #[tokio::test]
    async fn null_annotations_get_info_line() {
        let mut api = FakeChecksApi::with_jobs(&[5]);
        api.annotations.insert(5, None);

        let (result, output, trace) = report(&api, 1).await;
        result.unwrap();
        assert_eq!(
            output,
            "run ids: [5]\ninfo: no annotations found for job 5\n"
        );
        assert!(trace.messages_at(TraceLevel::Error).is_empty());
    }

    #[tokio::test]
    async fn jobs_are_fetched_in_order() {
        let api = FakeChecksApi::with_jobs(&[3, 1, 2]);

        let (result, _, _) = report(&api, 1).await;
        result.unwrap();
        assert_eq!(
            api.requests(),
            vec![
                "jobs octo/hello 42",
                "annotations 3",
                "annotations 1",
                "annotations 2"
            ]
        );
    }

    #[tokio::test]
    async fn fetch_error_aborts_remaining_jobs() {
        let mut api = FakeChecksApi::with_jobs(&[1, 2, 3]);
        api.failing_job = Some(2);

        let (result, output, _) = report(&api, 1).await;
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to get annotations for job 2"));
        assert!(!api.requests().contains(&"annotations 3".to_string()));
        assert!(output.starts_with("run ids: [1, 2, 3]\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_fetches_keep_job_order() {
        let build = || {
            let mut api = FakeChecksApi::with_jobs(&[1, 2, 3])
                .annotations(1, vec![json!({ "annotation_level": "error", "message": "one" })])
                .annotations(2, vec![json!({ "annotation_level": "warning", "message": "two" })])
                .annotations(3, vec![json!({ "annotation_level": "error", "message": "three" })]);
            api.delays.insert(1, Duration::from_millis(300));
            api.delays.insert(2, Duration::from_millis(200));
            api.delays.insert(3, Duration::from_millis(100));
            api
        };

        let sequential = build();
        let (r1, out_sequential, _) = report(&sequential, 1).await;
        let concurrent = build();
        let (r2, out_concurrent, _) = report(&concurrent, 3).await;

        assert_eq!(r1.unwrap(), r2.unwrap());
        assert_eq!(out_sequential, out_concurrent);
        assert!(out_concurrent.find("one").unwrap() < out_concurrent.find("three").unwrap());
    }

    #[tokio::test]
    async fn repeated_runs_produce_identical_output() {
        let api = FakeChecksApi::with_jobs(&[10, 20])
            .annotations(10, vec![json!({ "annotation_level": "warning", "message": "w" })])
            .annotations(20, vec![json!({ "annotation_level": "error", "message": "e" })]);

        let (_, first, _) = report(&api, 1).await;
        let (_, second, _) = report(&api, 1).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn summary_is_traced() {
        let api = FakeChecksApi::with_jobs(&[1]).annotations(
            1,
            vec![json!({ "annotation_level": "notice", "message": "n" })],
        );

        let (result, _, trace) = report(&api, 1).await;
        result.unwrap();
        assert!(trace
            .messages_at(TraceLevel::Info)
            .contains(&"Inspected 1 job(s): 1 annotation(s) fetched, 0 reported".to_string()));
    }
}
