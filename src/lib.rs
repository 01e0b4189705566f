//! Core library for the `kronos` CLI.
//!
//! `kronos` runs a batch of HTTP calls through a fixed pool of workers,
//! times each call up to its response headers and judges it against a
//! response-time threshold. The crate exposes the building blocks the binary
//! wires together: CLI argument types, configuration, job sources, the
//! dispatch engine, the HTTP transport and reporting. The command-line
//! application is the primary interface; library APIs may evolve with it.
pub mod args;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod http;
pub mod report;
pub mod shutdown;
pub mod source;
