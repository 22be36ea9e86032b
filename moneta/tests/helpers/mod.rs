// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use moneta_core::{CountryCode, CountryRef, CurrencyCode};

/// Construct a date from components for readability in tests.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("invalid date")
}

#[allow(dead_code)]
pub fn country(code: &str) -> CountryCode {
    CountryCode::parse(code).expect("invalid country code")
}

#[allow(dead_code)]
pub fn country_ref(code: &str) -> CountryRef {
    CountryRef::new(country(code))
}

#[allow(dead_code)]
pub fn currency(code: &str) -> CurrencyCode {
    CurrencyCode::parse(code).expect("invalid currency code")
}
