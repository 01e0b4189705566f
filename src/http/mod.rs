//! HTTP transport: the capability the worker pool uses to perform calls.
mod client;
mod transport;

#[cfg(test)]
mod tests;

pub use client::ReqwestTransport;
pub use transport::{BodyStream, Transport, TransportResponse};
