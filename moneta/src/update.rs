use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use moneta_core::{CountryCode, CurrencyCode, MonetaError, document};
use serde_json::{Map, Value};

use crate::Moneta;

/// Path of a country's target document under `config_dir`
/// (`tax-rules-<cc>.json`, country code lowercased).
#[must_use]
pub fn document_path(config_dir: &Path, country: &CountryCode) -> PathBuf {
    config_dir.join(format!("tax-rules-{}.json", country.lower()))
}

/// Currency recorded in the document's locale section, when present.
fn locale_currency(doc: &Map<String, Value>) -> Option<CurrencyCode> {
    doc.get(document::ANCHOR_KEY)?
        .get("currency")?
        .as_str()
        .and_then(|s| CurrencyCode::parse(s).ok())
}

impl Moneta {
    /// Fetch, assemble, and merge one country's economic data into its
    /// document.
    ///
    /// The document is rewritten only after the merged tree is fully built in
    /// memory. Source failures along the way reduce the populated fields;
    /// only document-level problems surface as errors.
    ///
    /// # Errors
    /// Returns `NotFound` when the document does not exist, and `Io`/`Json`/
    /// `Data` when it cannot be read, parsed, or written.
    pub async fn update_country(
        &self,
        country: &CountryCode,
        config_dir: &Path,
        today: NaiveDate,
    ) -> Result<PathBuf, MonetaError> {
        let path = document_path(config_dir, country);
        if !path.exists() {
            return Err(MonetaError::not_found(format!(
                "document {} for {country}",
                path.display()
            )));
        }
        let doc = document::read_document(&path)?;
        let record = self
            .country_record(country, locale_currency(&doc), today)
            .await;
        let block = document::economic_block(&record);
        let merged = document::merge_economic_block(&doc, block);
        document::write_document(&path, &merged)?;
        Ok(path)
    }

    /// Update every requested country, strictly sequentially.
    ///
    /// A missing document or failed merge is reported for that country and
    /// never aborts the remaining ones; each country's document is read,
    /// merged, and rewritten independently. Outcomes are returned in input
    /// order.
    pub async fn update_many(
        &self,
        countries: &[CountryCode],
        config_dir: &Path,
        today: NaiveDate,
    ) -> Vec<(CountryCode, Result<PathBuf, MonetaError>)> {
        let mut outcomes = Vec::with_capacity(countries.len());
        for country in countries {
            let outcome = self.update_country(country, config_dir, today).await;
            match &outcome {
                Ok(path) => {
                    tracing::info!(country = %country, path = %path.display(), "economic data updated");
                }
                Err(e) => {
                    tracing::warn!(country = %country, error = %e, "country skipped");
                }
            }
            outcomes.push((country.clone(), outcome));
        }
        outcomes
    }
}
