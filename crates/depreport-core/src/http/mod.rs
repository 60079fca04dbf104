//! HTTP client for the GitHub deployments API

pub mod client;
pub mod dump;
pub mod transport;

pub use client::DeploymentsClient;
pub use dump::HttpDump;
pub use transport::{IncomingResponse, OutgoingRequest, ReqwestTransport};
