//! # depreport core
//!
//! Reports a deployment and its status to the GitHub REST API from a CI
//! step.
//!
//! The flow is two sequential calls:
//! 1. `POST /repos/{owner}/{repo}/deployments` creates a `staging`
//!    deployment for the commit and yields its identifier.
//! 2. `POST /repos/{owner}/{repo}/deployments/{id}/statuses` attaches the
//!    resolved state and description.
//!
//! ## Example
//!
//! ```no_run
//! use depreport_core::{report_deployment_sync, BuildStatus, Config, StepInputs};
//!
//! # fn example() -> depreport_core::Result<()> {
//! let config = Config::from_inputs(StepInputs {
//!     auth_token: Some("ghp_xxx"),
//!     repository_url: Some("git@github.com:acme/widgets.git"),
//!     commit_hash: Some("abc123"),
//!     set_specific_status: Some("success"),
//!     ..Default::default()
//! })?;
//!
//! let outcome = report_deployment_sync(&config, BuildStatus::new(None))?;
//! println!("deployment {} is {}", outcome.deployment_id, outcome.state);
//! # Ok(())
//! # }
//! ```

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod http;
pub mod reporter;
pub mod repository;
pub mod status;
pub mod traits;
pub mod types;

pub use config::{Config, Secret, StepInputs};
pub use error::{Error, ErrorKind, Result};
pub use reporter::DeploymentReporter;
pub use repository::RepositorySlug;
pub use status::{resolve_description, resolve_state, BuildStatus, DeploymentState, StatePreset};
pub use types::DeploymentOutcome;

use http::ReqwestTransport;

/// Report the deployment over HTTPS
pub async fn report_deployment(
    config: &Config,
    build_status: BuildStatus,
) -> Result<DeploymentOutcome> {
    let transport = ReqwestTransport::new(config.request_timeout)?;
    DeploymentReporter::new(config, transport, build_status)
        .run()
        .await
}

/// Synchronous variant of `report_deployment`
///
/// Drives the calls on a single-threaded Tokio runtime; the calling thread
/// blocks until both calls finish or one fails.
pub fn report_deployment_sync(
    config: &Config,
    build_status: BuildStatus,
) -> Result<DeploymentOutcome> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(e.to_string()))?
        .block_on(report_deployment(config, build_status))
}
