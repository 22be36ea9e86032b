//! moneta-core
//!
//! Core types, traits, and utilities shared across the moneta ecosystem.
//!
//! - `types`: common data structures (country/currency codes, observations,
//!   records, configuration).
//! - `connector`: the `MonetaConnector` trait and capability provider traits.
//! - `timeseries`: year-series normalization and robust estimation.
//! - `document`: order-preserving target-document merge and rendering.
//! - `http`: retrying JSON transport shared by source connectors.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: the retry
//! delays in `http::HttpClient` are driven by `tokio::time::sleep`, so code
//! performing fetches must run under a Tokio 1.x runtime. Everything else
//! (normalization, estimation, document merge/render) is synchronous and pure.
#![warn(missing_docs)]

/// Connector capability traits and the primary `MonetaConnector` interface.
pub mod connector;
/// Order-preserving document model: merge, canonical rendering, persistence.
pub mod document;
/// Unified error type for the moneta workspace.
pub mod error;
/// Retrying JSON-over-HTTP helper used by source connectors.
pub mod http;
/// Year-series utilities: normalization and robust estimation.
pub mod timeseries;
pub mod types;

pub use connector::MonetaConnector;
pub use document::{economic_block, merge_economic_block, read_document, render, write_document};
pub use error::MonetaError;
pub use http::HttpClient;
pub use timeseries::{Estimate, YearSeries, estimate, normalize};
pub use types::*;
