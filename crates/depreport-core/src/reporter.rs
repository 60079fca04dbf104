//! Two-step deployment report: create the deployment, then its status

use crate::config::Config;
use crate::error::Result;
use crate::http::DeploymentsClient;
use crate::status::{resolve_description, resolve_state, BuildStatus};
use crate::traits::HttpTransport;
use crate::types::{DeploymentOutcome, DeploymentRequest, DeploymentStatusRequest};
use tracing::info;

/// Reports one deployment and its status for a validated [`Config`]
pub struct DeploymentReporter<'c, T> {
    config: &'c Config,
    client: DeploymentsClient<T>,
    build_status: BuildStatus,
}

impl<'c, T: HttpTransport> DeploymentReporter<'c, T> {
    pub fn new(config: &'c Config, transport: T, build_status: BuildStatus) -> Self {
        let client = DeploymentsClient::new(transport, config.auth_token.clone(), config.verbose);
        Self {
            config,
            client,
            build_status,
        }
    }

    /// Borrow the API client
    pub fn client(&self) -> &DeploymentsClient<T> {
        &self.client
    }

    /// Run the report.
    ///
    /// The status call is only attempted after the deployment call returned
    /// 201 with a parseable identifier. A failed status call leaves the
    /// deployment record in place.
    pub async fn run(&self) -> Result<DeploymentOutcome> {
        let config = self.config;
        let state = resolve_state(config.state, &self.build_status);
        let description = resolve_description(
            config.description.as_deref().unwrap_or_default(),
            config.state,
            &self.build_status,
        );

        info!(
            repository = %config.repository,
            commit = %config.commit_hash,
            %state,
            "reporting deployment"
        );

        let deployment = self
            .client
            .create_deployment(
                &config.deployments_url(),
                &DeploymentRequest::staging(&config.commit_hash, &description),
            )
            .await?;

        println!("deployment id {}", deployment.id);

        let environment_url = config.build_url.as_deref().unwrap_or_default();
        self.client
            .create_deployment_status(
                &config.statuses_url(deployment.id),
                &DeploymentStatusRequest::staging(environment_url, state, &description),
            )
            .await?;

        Ok(DeploymentOutcome {
            deployment_id: deployment.id,
            deployment_url: deployment.url,
            state,
            description,
        })
    }
}
