//! Moneta orchestrates macroeconomic data requests across multiple sources.
//!
//! Overview
//! - Routes requests to connectors that implement the `moneta_core` contracts.
//! - Tries sources strictly in priority order per logical quantity; the first
//!   usable answer wins and every failure degrades to "try the next source".
//! - Assembles one reconciled record per country and merges it into that
//!   country's target document without disturbing unrelated keys or order.
//!
//! Key behaviors
//! - Execution is sequential and deterministic: countries one at a time,
//!   sources one at a time in priority order. The only suspension points are
//!   bounded network calls.
//! - Registration order is the default source priority; per-quantity
//!   overrides make the order an explicit, documented configuration.
//! - A country whose currency equals the reference currency is pinned to an
//!   exchange rate of exactly 1.0 without consulting any source.
//!
//! Building an orchestrator with explicit priorities:
//! ```rust,ignore
//! use std::sync::Arc;
//! use moneta::{Moneta, Quantity};
//! use moneta_core::MonetaConnector;
//!
//! let worldbank: Arc<dyn MonetaConnector> = Arc::new(WorldBankConnector::builder().build()?);
//! let ecb: Arc<dyn MonetaConnector> = Arc::new(EcbConnector::builder().build()?);
//!
//! let moneta = Moneta::builder()
//!     .with_connector(worldbank.clone())
//!     .with_connector(ecb.clone())
//!     // daily reference rates beat the once-a-year official statistic
//!     .prefer_for_quantity(Quantity::FxRate, &[ecb, worldbank])
//!     .build()?;
//! ```
//!
//! Updating a country's document:
//! ```rust,ignore
//! let today = chrono::Utc::now().date_naive();
//! let country = moneta::CountryCode::parse("IE")?;
//! moneta.update_country(&country, std::path::Path::new("config"), today).await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod record;
mod router;
mod update;

pub use core::{Moneta, MonetaBuilder};
pub use update::document_path;

// Re-export core types for convenience
pub use moneta_core::{
    ConnectorKey,
    CountryCode,
    CountryMeta,
    CountryRecord,
    CountryRef,
    CurrencyCode,
    Estimate,
    Indicator,
    MonetaConfig,
    MonetaConnector,
    MonetaError,
    Observation,
    Quantity,
    RateObservation,
    RetryPolicy,
    YearSeries,
};
