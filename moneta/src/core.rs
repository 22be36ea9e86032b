use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use moneta_core::{ConnectorKey, CurrencyCode, MonetaConfig, MonetaConnector, MonetaError, Quantity};

/// Orchestrator that routes requests across registered sources.
pub struct Moneta {
    pub(crate) connectors: Vec<Arc<dyn MonetaConnector>>,
    pub(crate) cfg: MonetaConfig,
}

impl std::fmt::Debug for Moneta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Moneta")
            .field("connectors", &self.connectors.len())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Moneta` orchestrator with custom configuration.
pub struct MonetaBuilder {
    connectors: Vec<Arc<dyn MonetaConnector>>,
    cfg: MonetaConfig,
}

impl Default for MonetaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MonetaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Starts with no connectors; you must register at least one via
    /// [`with_connector`](Self::with_connector). Defaults: 20 s source
    /// timeout, 5-year estimator window, euro reference currency, no explicit
    /// priorities (registration order applies).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: MonetaConfig::default(),
        }
    }

    /// Register a source connector.
    ///
    /// The order in which connectors are registered is the default priority
    /// for every quantity without an explicit `prefer_for_quantity` entry.
    /// Duplicates are not deduplicated; avoid registering the same connector
    /// twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MonetaConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the preferred source order for a logical quantity.
    ///
    /// The list is an ordering hint: unlisted but capable connectors are
    /// still considered after the listed ones. This is the explicit,
    /// overridable form of the source-priority policy; code order is only
    /// the fallback.
    #[must_use]
    pub fn prefer_for_quantity(
        mut self,
        quantity: Quantity,
        connectors_desc: &[Arc<dyn MonetaConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self.cfg.per_quantity_priority.insert(quantity, keys);
        self
    }

    /// Set the per-source request timeout applied around every provider call.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set the estimator window in years; zero disables windowing.
    #[must_use]
    pub const fn estimate_window(mut self, years: u32) -> Self {
        self.cfg.estimate_window = years;
        self
    }

    /// Set the reference currency FX rates are quoted against.
    #[must_use]
    pub fn reference_currency(mut self, currency: CurrencyCode) -> Self {
        self.cfg.reference_currency = currency;
        self
    }

    /// Build the `Moneta` orchestrator.
    ///
    /// Priority lists are validated against the registered connectors:
    /// unknown keys are dropped and duplicates collapse to their first
    /// occurrence.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(mut self) -> Result<Moneta, MonetaError> {
        let known: HashSet<&'static str> = self.connectors.iter().map(|c| c.name()).collect();

        for keys in self.cfg.per_quantity_priority.values_mut() {
            let mut seen: HashSet<&'static str> = HashSet::new();
            keys.retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));
        }

        if self.connectors.is_empty() {
            return Err(MonetaError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Moneta {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub(crate) fn tag_err(name: &str, e: MonetaError) -> MonetaError {
    match e {
        e @ (MonetaError::NotFound { .. }
        | MonetaError::SourceTimeout { .. }
        | MonetaError::Source { .. }
        | MonetaError::AllSourcesFailed(_)) => e,
        other => MonetaError::Source {
            name: name.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Moneta {
    /// Start building a new `Moneta` instance.
    #[must_use]
    pub fn builder() -> MonetaBuilder {
        MonetaBuilder::new()
    }

    /// Wrap a source future with a timeout and standardized timeout error
    /// mapping.
    pub(crate) async fn source_call<T, Fut>(
        source_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, MonetaError>
    where
        Fut: core::future::Future<Output = Result<T, MonetaError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(MonetaError::source_timeout(source_name, capability)))
    }

    /// Connectors in the order they should be tried for a quantity.
    pub(crate) fn ordered(&self, quantity: Quantity) -> Vec<Arc<dyn MonetaConnector>> {
        let out: Vec<(usize, Arc<dyn MonetaConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();

        if let Some(pref) = self.cfg.per_quantity_priority.get(&quantity) {
            let pos: HashMap<_, _> = pref
                .iter()
                .enumerate()
                .map(|(i, k)| (k.as_str(), i))
                .collect();
            let mut out = out;
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
            return out.into_iter().map(|(_, c)| c).collect();
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic first-usable-answer fetch across sources in priority order.
    ///
    /// - Tries each eligible connector strictly in order; the first `Ok`
    ///   wins and later sources are never consulted.
    /// - Applies the per-source timeout around every call.
    /// - Aggregates errors; when every attempted source reported `NotFound`
    ///   the aggregate collapses to a single `NotFound` for the label.
    pub(crate) async fn fetch_first<T, F, Fut>(
        &self,
        quantity: Quantity,
        capability_label: &'static str,
        not_found_label: String,
        select: F,
    ) -> Result<T, MonetaError>
    where
        F: Fn(Arc<dyn MonetaConnector>) -> Option<Fut>,
        Fut: core::future::Future<Output = Result<T, MonetaError>>,
    {
        let mut attempted_any = false;
        let mut errors: Vec<MonetaError> = Vec::new();

        for c in self.ordered(quantity) {
            let name = c.name();
            if let Some(fut) = select(c) {
                attempted_any = true;
                match Self::source_call(name, capability_label, self.cfg.source_timeout, fut).await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (MonetaError::NotFound { .. } | MonetaError::SourceTimeout { .. })) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        errors.push(tag_err(name, e));
                    }
                }
            }
        }

        if !attempted_any {
            return Err(MonetaError::unsupported(capability_label));
        }

        if errors
            .iter()
            .all(|e| matches!(e, MonetaError::NotFound { .. }))
        {
            return Err(MonetaError::not_found(not_found_label));
        }

        Err(MonetaError::AllSourcesFailed(errors))
    }
}
