//! Wire types for the deployments API

use crate::status::DeploymentState;
use serde::{Deserialize, Serialize};

/// Environment every deployment targets
pub const ENVIRONMENT: &str = "staging";

/// Body of `POST /repos/{owner}/{repo}/deployments`
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRequest<'a> {
    /// Status check contexts to verify before deploying (always empty)
    pub required_contexts: Vec<&'a str>,
    /// Commit to deploy
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
    /// Target environment
    pub environment: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<DeploymentState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'a str>,
}

impl<'a> DeploymentRequest<'a> {
    /// Staging deployment of `git_ref` with no required contexts
    pub fn staging(git_ref: &'a str, description: &'a str) -> Self {
        Self {
            required_contexts: Vec::new(),
            git_ref,
            environment: ENVIRONMENT,
            state: None,
            target_url: None,
            description: Some(description).filter(|d| !d.is_empty()),
            context: None,
        }
    }
}

/// Body of `POST /repos/{owner}/{repo}/deployments/{id}/statuses`
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentStatusRequest<'a> {
    pub environment_url: &'a str,
    pub environment: &'a str,
    pub state: DeploymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl<'a> DeploymentStatusRequest<'a> {
    /// Staging status update
    pub fn staging(environment_url: &'a str, state: DeploymentState, description: &'a str) -> Self {
        Self {
            environment_url,
            environment: ENVIRONMENT,
            state,
            description: Some(description).filter(|d| !d.is_empty()),
        }
    }
}

/// Fields consumed from the create-deployment response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeploymentResponse {
    /// Deployment identifier
    pub id: u64,
    /// API URL of the deployment record
    #[serde(default)]
    pub url: String,
}

/// Result of a completed report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutcome {
    /// Identifier returned by the create-deployment call
    pub deployment_id: u64,
    /// API URL of the deployment record
    pub deployment_url: String,
    /// State attached to the deployment
    pub state: DeploymentState,
    /// Description attached to the deployment and its status
    pub description: String,
}
