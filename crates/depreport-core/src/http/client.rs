//! GitHub REST API client for deployments and deployment statuses
//!
//! See <https://docs.github.com/en/rest/deployments>.

use super::dump::{needs_dump, HttpDump};
use super::transport::{IncomingResponse, OutgoingRequest};
use crate::config::Secret;
use crate::error::{Error, Result};
use crate::traits::HttpTransport;
use crate::types::{DeploymentRequest, DeploymentResponse, DeploymentStatusRequest};
use serde::Serialize;
use tracing::{debug, info};

/// Longest response body excerpt carried in an error
const ERROR_BODY_LIMIT: usize = 512;

/// Deployments API client over any [`HttpTransport`]
pub struct DeploymentsClient<T> {
    transport: T,
    token: Secret,
    verbose: bool,
}

impl<T: std::fmt::Debug> std::fmt::Debug for DeploymentsClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeploymentsClient")
            .field("transport", &self.transport)
            .field("token", &self.token)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl<T: HttpTransport> DeploymentsClient<T> {
    /// Create a client; `verbose` dumps every exchange, not only failed ones
    pub fn new(transport: T, token: Secret, verbose: bool) -> Self {
        Self {
            transport,
            token,
            verbose,
        }
    }

    /// Borrow the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a deployment and return its identifier and URL.
    ///
    /// Endpoint: POST /repos/{owner}/{repo}/deployments
    pub async fn create_deployment(
        &self,
        url: &str,
        payload: &DeploymentRequest<'_>,
    ) -> Result<DeploymentResponse> {
        let response = self.post_expect_created(url, payload).await?;

        let deployment: DeploymentResponse =
            serde_json::from_slice(&response.body).map_err(|e| {
                Error::ResponseParse(format!("invalid deployment response body: {}", e))
            })?;

        info!(deployment_id = deployment.id, "deployment created");
        Ok(deployment)
    }

    /// Attach a status to an existing deployment.
    ///
    /// Endpoint: POST /repos/{owner}/{repo}/deployments/{id}/statuses
    pub async fn create_deployment_status(
        &self,
        url: &str,
        payload: &DeploymentStatusRequest<'_>,
    ) -> Result<()> {
        self.post_expect_created(url, payload).await?;
        info!(state = %payload.state, "deployment status created");
        Ok(())
    }

    /// POST `payload` as JSON and require 201 Created.
    ///
    /// The exchange is printed to standard output before the status is
    /// evaluated whenever it failed or `verbose` is set.
    async fn post_expect_created<B: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<IncomingResponse> {
        let request = OutgoingRequest::json(url, &self.token, payload)?;

        debug!(method = "POST", url = %request.url, "sending request");
        let response = self.transport.post(&request).await?;
        debug!(status = response.status, "received response");

        if needs_dump(&response, self.verbose) {
            println!("{}", HttpDump::new(&request, &response));
        }

        if !response.is_created() {
            return Err(Error::UnexpectedStatus {
                code: response.status,
                status: response.status_text(),
                body: body_excerpt(&response),
            });
        }

        Ok(response)
    }
}

fn body_excerpt(response: &IncomingResponse) -> String {
    response
        .body_text()
        .trim()
        .chars()
        .take(ERROR_BODY_LIMIT)
        .collect()
}
