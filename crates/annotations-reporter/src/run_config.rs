// RunConfig: the validated, immutable configuration for one report.

use std::fmt;
use std::num::NonZeroUsize;

use annotations_common::constants::{api, variables};
use annotations_common::ReporterError;
use annotations_sdk::StringUtil;
use url::Url;

use crate::command_settings::CommandSettings;

/// A repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse an `owner/repo` slug. Both halves must be non-empty and the name
    /// must not contain a further `/`.
    pub fn parse(value: &str) -> Result<Self, ReporterError> {
        let invalid = || ReporterError::InvalidRepository {
            value: value.to_string(),
        };
        let (owner, name) = value.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Configuration read once at startup and passed by reference to the reporter.
#[derive(Clone)]
pub struct RunConfig {
    pub token: String,
    pub run_id: String,
    pub repository: Repository,
    /// Base URL with a trailing `/`; request paths are appended below it.
    pub api_url: Url,
    pub concurrency: NonZeroUsize,
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("token", &"***")
            .field("run_id", &self.run_id)
            .field("repository", &self.repository)
            .field("api_url", &self.api_url.as_str())
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl RunConfig {
    /// Validate the command settings.
    ///
    /// The token, run id and repository are checked in that order and the
    /// first one absent or empty is reported. Values are used exactly as given.
    pub fn from_settings(settings: &CommandSettings) -> Result<Self, ReporterError> {
        let token = require(settings.token.as_deref(), variables::TOKEN)?;
        let run_id = require(settings.run_id.as_deref(), variables::RUN_ID)?;
        let repository = require(settings.repository.as_deref(), variables::REPOSITORY)?;
        let repository = Repository::parse(repository)?;

        let api_url = parse_api_url(
            StringUtil::non_empty(settings.api_url.as_deref()).unwrap_or(api::DEFAULT_URL),
        )?;

        Ok(Self {
            token: token.to_string(),
            run_id: run_id.to_string(),
            repository,
            api_url,
            concurrency: settings.concurrency,
        })
    }
}

fn require<'a>(value: Option<&'a str>, variable: &'static str) -> Result<&'a str, ReporterError> {
    StringUtil::non_empty(value).ok_or(ReporterError::MissingConfiguration { variable })
}

/// Parse the API base URL, normalising it to end with exactly one `/` so that
/// request paths land under it (`https://host/api/v3` keeps its `/v3`).
pub fn parse_api_url(value: &str) -> Result<Url, ReporterError> {
    let normalized = format!("{}/", value.trim_end_matches('/'));
    let url = Url::parse(&normalized).map_err(|source| ReporterError::InvalidApiUrl {
        value: value.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ReporterError::InvalidApiUrl {
            value: value.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}
