use thiserror::Error;

/// Unified error type for the moneta workspace.
///
/// This wraps capability mismatches, argument validation errors, source-tagged
/// failures, not-found conditions, and an aggregate for multi-source sweeps.
/// The routing layer treats every source-level failure as "try the next
/// source"; only invocation errors abort a run.
#[derive(Debug, Error)]
pub enum MonetaError {
    /// The requested capability is not implemented by any registered source.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "reference-rate").
        capability: &'static str,
    },

    /// Issues with the returned or expected data (missing fields, bad numbers, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual source returned an error (transport, HTTP status, decode).
    #[error("{name} failed: {msg}")]
    Source {
        /// Source name that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A value or series could not be found in a source's response.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing value, e.g. "reference rate for ARS".
        what: String,
    },

    /// All eligible sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<MonetaError>),

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {capability} via {name}")]
    SourceTimeout {
        /// Source name that timed out.
        name: String,
        /// Capability label (e.g. "latest-observation", "indicator-series").
        capability: &'static str,
    },

    /// Reading or writing a target document failed.
    #[error("document io: {0}")]
    Io(#[from] std::io::Error),

    /// A target document (or payload handed to the store) is not valid JSON.
    #[error("document parse: {0}")]
    Json(#[from] serde_json::Error),
}

impl MonetaError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source_failure(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing value.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(name: impl Into<String>, capability: &'static str) -> Self {
        Self::SourceTimeout {
            name: name.into(),
            capability,
        }
    }
}
