//! GATs trait definitions for the HTTP seam

use crate::error::Error;
use crate::http::transport::{IncomingResponse, OutgoingRequest};
use std::future::Future;

/// HTTP transport used by the deployments client.
///
/// The orchestrator is generic over this trait, so production code and
/// tests share the same request sequence without dynamic dispatch.
pub trait HttpTransport {
    /// GAT for the async POST operation
    type PostFuture<'a>: Future<Output = std::result::Result<IncomingResponse, Error>> + Send + 'a
    where
        Self: 'a;

    /// Send `request` and return the response with its body fully read.
    ///
    /// Only failures to obtain a response are errors; any HTTP status,
    /// including 4xx/5xx, is returned as `Ok`.
    fn post<'a>(&'a self, request: &'a OutgoingRequest) -> Self::PostFuture<'a>;
}
