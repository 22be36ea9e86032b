//! Time-series utilities shared by connectors and orchestrator.
//!
//! Modules include:
//! - `normalize`: reconcile heterogeneous provider payloads into a `YearSeries`
//! - `estimate`: derive a robust headline figure from a percent-change series
/// Robust median-of-log-growth estimation.
pub mod estimate;
/// Shape probing and per-entry parsing of raw provider series.
pub mod normalize;

pub use estimate::{Estimate, estimate};
pub use normalize::{normalize, parse_numeric, parse_year};

use std::collections::BTreeMap;

/// Ordered mapping from calendar year to a numeric value.
///
/// Keys are unique and iteration is strictly ascending by year; the
/// estimator relies on this ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearSeries(BTreeMap<i32, f64>);

impl YearSeries {
    /// Create an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace the value recorded for a year.
    pub fn insert(&mut self, year: i32, value: f64) {
        self.0.insert(year, value);
    }

    /// Number of years present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value recorded for `year`, if any.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<f64> {
        self.0.get(&year).copied()
    }

    /// Most recent (year, value) pair.
    #[must_use]
    pub fn latest(&self) -> Option<(i32, f64)> {
        self.0.iter().next_back().map(|(y, v)| (*y, *v))
    }

    /// Iterate entries ascending by year.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.0.iter().map(|(y, v)| (*y, *v))
    }
}

impl FromIterator<(i32, f64)> for YearSeries {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
