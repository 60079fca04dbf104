//! Step configuration
//!
//! Inputs arrive as environment-sourced strings. CI runners export unset
//! optional inputs as empty strings, so empty is treated as absent
//! throughout.

use crate::error::{Error, Result};
use crate::repository::RepositorySlug;
use crate::status::StatePreset;
use std::fmt;
use std::time::Duration;

/// Default API root
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw step inputs, borrowed from the CLI arguments
#[derive(Debug, Clone, Copy, Default)]
pub struct StepInputs<'a> {
    pub auth_token: Option<&'a str>,
    pub repository_url: Option<&'a str>,
    pub commit_hash: Option<&'a str>,
    pub api_base_url: Option<&'a str>,
    pub set_specific_status: Option<&'a str>,
    pub build_url: Option<&'a str>,
    pub status_identifier: Option<&'a str>,
    pub description: Option<&'a str>,
    pub verbose: Option<&'a str>,
    pub request_timeout_secs: Option<&'a str>,
}

/// Auth token that never appears in `Debug` or `Display` output
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a token
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the token for the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*****")
    }
}

/// Validated configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub auth_token: Secret,
    pub repository_url: String,
    /// Owner and name parsed from `repository_url`
    pub repository: RepositorySlug,
    pub commit_hash: String,
    /// API root without a trailing `/`
    pub api_base_url: String,
    pub state: StatePreset,
    pub build_url: Option<String>,
    /// Accepted for compatibility; not sent to the API
    pub status_identifier: Option<String>,
    pub description: Option<String>,
    pub verbose: bool,
    pub request_timeout: Duration,
}

impl Config {
    /// Validate raw inputs.
    ///
    /// All missing required inputs are reported in a single error, before
    /// any value-level validation.
    pub fn from_inputs(inputs: StepInputs<'_>) -> Result<Self> {
        let auth_token = present(inputs.auth_token);
        let repository_url = present(inputs.repository_url);
        let commit_hash = present(inputs.commit_hash);

        let missing: Vec<&str> = [
            ("auth_token", auth_token.is_none()),
            ("repository_url", repository_url.is_none()),
            ("commit_hash", commit_hash.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect();

        let (auth_token, repository_url, commit_hash) =
            match (auth_token, repository_url, commit_hash) {
                (Some(token), Some(url), Some(hash)) => (token, url, hash),
                _ => {
                    return Err(Error::Config(format!(
                        "required input(s) not set: {}",
                        missing.join(", ")
                    )))
                }
            };

        let state = match present(inputs.set_specific_status) {
            Some(value) => value.parse()?,
            None => StatePreset::Auto,
        };

        let verbose = match present(inputs.verbose) {
            Some(value) => parse_flag("verbose", value)?,
            None => false,
        };

        let request_timeout = match present(inputs.request_timeout_secs) {
            Some(value) => parse_timeout(value)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let api_base_url = present(inputs.api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        if api_base_url.is_empty() {
            return Err(Error::Config("api_base_url: empty after trimming".into()));
        }

        let repository = RepositorySlug::parse(repository_url)?;

        Ok(Self {
            auth_token: Secret::new(auth_token),
            repository_url: repository_url.to_string(),
            repository,
            commit_hash: commit_hash.to_string(),
            api_base_url,
            state,
            build_url: present(inputs.build_url).map(str::to_owned),
            status_identifier: present(inputs.status_identifier).map(str::to_owned),
            description: present(inputs.description).map(str::to_owned),
            verbose,
            request_timeout,
        })
    }

    /// `{api_base}/repos/{owner}/{repo}/deployments`
    pub fn deployments_url(&self) -> String {
        format!("{}/{}/deployments", self.api_base_url, self.repository.api_path())
    }

    /// `{api_base}/repos/{owner}/{repo}/deployments/{id}/statuses`
    pub fn statuses_url(&self, deployment_id: u64) -> String {
        format!("{}/statuses", self.deployment_url(deployment_id))
    }

    fn deployment_url(&self, deployment_id: u64) -> String {
        format!("{}/{}", self.deployments_url(), deployment_id)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("<unset>")
        }

        writeln!(f, "Configs:")?;
        writeln!(f, "- auth_token: {}", self.auth_token)?;
        writeln!(f, "- repository_url: {}", self.repository_url)?;
        writeln!(f, "- commit_hash: {}", self.commit_hash)?;
        writeln!(f, "- api_base_url: {}", self.api_base_url)?;
        writeln!(f, "- set_specific_status: {}", self.state)?;
        writeln!(f, "- build_url: {}", opt(&self.build_url))?;
        writeln!(f, "- status_identifier: {}", opt(&self.status_identifier))?;
        writeln!(f, "- description: {}", opt(&self.description))?;
        writeln!(f, "- verbose: {}", self.verbose)?;
        write!(f, "- request_timeout_secs: {}", self.request_timeout.as_secs())
    }
}

/// Filter empty string from Option (env vars may produce "" for empty values)
#[inline]
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Parse a boolean step input (`yes`/`no` style as well as `true`/`false`)
pub fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "no" | "n" | "false" | "f" | "0" | "off" => Ok(false),
        "yes" | "y" | "true" | "t" | "1" | "on" => Ok(true),
        other => Err(Error::Config(format!(
            "{}: invalid boolean value {:?}, expected yes or no",
            name, other
        ))),
    }
}

fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(Error::Config(
            "request_timeout_secs: must be greater than zero".into(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(Error::Config(format!(
            "request_timeout_secs: invalid number {:?}",
            value
        ))),
    }
}
