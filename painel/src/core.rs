use std::sync::Arc;
use std::time::Duration;

use chrono_tz::Tz;
use painel_core::{
    Clock, ColumnMap, PainelConfig, PainelError, RecordSource, Snapshot, StatusResponse,
    SystemClock,
};
use painel_middleware::ResultCache;

/// Context object that builds and caches dashboard snapshots.
///
/// Built once at process start and shared (typically behind `Arc`) by every request
/// handler. It owns the record source, the clock, the configuration and the single
/// snapshot slot; there is no global state.
pub struct Painel {
    pub(crate) source: Arc<dyn RecordSource>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) cache: ResultCache,
    pub(crate) cfg: PainelConfig,
}

/// Builder for constructing a `Painel` with custom configuration.
pub struct PainelBuilder {
    source: Option<Arc<dyn RecordSource>>,
    clock: Arc<dyn Clock>,
    cfg: PainelConfig,
}

impl Default for PainelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PainelBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: `America/Sao_Paulo` windows, 300 s snapshot TTL, top-10 rankings,
    /// five recent sales, `,`-separated item cells, system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            clock: Arc::new(SystemClock),
            cfg: PainelConfig::default(),
        }
    }

    /// Register the record source both tables are fetched from.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn RecordSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PainelConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Zone the "today" and "month-to-date" windows are evaluated in.
    #[must_use]
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Lifetime of a cached snapshot. `Duration::ZERO` rebuilds on every call.
    #[must_use]
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cfg.cache.ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Maximum number of rows per ranking.
    #[must_use]
    pub const fn ranking_limit(mut self, limit: usize) -> Self {
        self.cfg.ranking_limit = limit;
        self
    }

    /// Number of entries in the recent sales list.
    #[must_use]
    pub const fn recent_limit(mut self, limit: usize) -> Self {
        self.cfg.recent_limit = limit;
        self
    }

    /// Separator of the multi-value item cell.
    #[must_use]
    pub const fn item_separator(mut self, sep: char) -> Self {
        self.cfg.item_separator = sep;
        self
    }

    /// Column names of the upstream tables.
    #[must_use]
    pub fn columns(mut self, columns: ColumnMap) -> Self {
        self.cfg.columns = columns;
        self
    }

    /// Clock sampled once per build. Tests inject a manual clock here.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the `Painel`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if no source was registered, a limit is zero or a
    /// column name is blank.
    pub fn build(self) -> Result<Painel, PainelError> {
        let Some(source) = self.source else {
            return Err(PainelError::InvalidConfig(
                "no record source registered; add one via with_source(...)".to_string(),
            ));
        };
        if self.cfg.ranking_limit == 0 {
            return Err(PainelError::InvalidConfig(
                "ranking_limit must be at least 1".to_string(),
            ));
        }
        if self.cfg.recent_limit == 0 {
            return Err(PainelError::InvalidConfig(
                "recent_limit must be at least 1".to_string(),
            ));
        }
        if let Some(col) = self.cfg.columns.first_blank() {
            return Err(PainelError::InvalidConfig(format!("column {col} is blank")));
        }

        let cache = ResultCache::new(&self.cfg.cache);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "painel::core",
            source = source.name(),
            vendor = source.vendor(),
            cache = cache.name(),
            cache_cfg = %cache.config_json(),
            "painel built"
        );

        Ok(Painel {
            cache,
            source,
            clock: self.clock,
            cfg: self.cfg,
        })
    }
}

/// Attach the source name to errors that do not already identify their origin.
pub(crate) fn tag_err(source: &str, e: PainelError) -> PainelError {
    match e {
        e @ (PainelError::MissingConfig { .. }
        | PainelError::Source { .. }
        | PainelError::TableNotFound { .. }
        | PainelError::InvalidConfig(_)) => e,
        other => PainelError::source(source, other.to_string()),
    }
}

impl Painel {
    /// Start building a new `Painel` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let painel = painel::Painel::builder()
    ///     .with_source(Arc::new(painel_mock::MockSource::new()))
    ///     .cache_ttl(Duration::from_secs(600))
    ///     .build()?;
    /// let status = painel.status().await;
    /// ```
    #[must_use]
    pub fn builder() -> PainelBuilder {
        PainelBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &PainelConfig {
        &self.cfg
    }

    /// Lifetime of a cached snapshot, `None` when caching is disabled.
    #[must_use]
    pub const fn cache_ttl(&self) -> Option<Duration> {
        self.cache.ttl()
    }

    /// Diagnostics of the snapshot cache: slot key and TTL.
    #[must_use]
    pub fn cache_info(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.cache.name(),
            "config": self.cache.config_json(),
        })
    }

    /// Vendor string of the registered record source.
    #[must_use]
    pub fn source_vendor(&self) -> &'static str {
        self.source.vendor()
    }

    /// Name of the registered record source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// The current snapshot: the cached one while it is live, otherwise a fresh build.
    ///
    /// Concurrent callers that miss the cache each run their own build; the last one to
    /// finish overwrites the slot. Failed builds are never cached, so the next call
    /// retries from scratch.
    ///
    /// # Errors
    /// Returns the source's error when either table cannot be fetched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "painel::core",
            name = "painel::core::snapshot",
            skip(self),
            fields(source = self.source.name()),
        )
    )]
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, PainelError> {
        if let Some(hit) = self.cache.get().await {
            return Ok(hit);
        }
        self.rebuild().await
    }

    /// Drop the cached snapshot and build a new one.
    ///
    /// # Errors
    /// Returns the source's error when either table cannot be fetched.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, PainelError> {
        self.cache.invalidate().await;
        self.rebuild().await
    }

    /// Status payload for the dashboard endpoint.
    ///
    /// Never fails: build errors are folded into `StatusResponse::Error`, which the
    /// caller serves like any other payload.
    pub async fn status(&self) -> StatusResponse {
        let res = self.snapshot().await;
        #[cfg(feature = "tracing")]
        if let Err(e) = &res {
            tracing::warn!(target: "painel::core", kind = e.kind(), error = %e, "snapshot build failed");
        }
        res.into()
    }

    async fn rebuild(&self) -> Result<Arc<Snapshot>, PainelError> {
        let built = crate::snapshot::build_snapshot(
            self.source.as_ref(),
            self.clock.as_ref(),
            &self.cfg,
        )
        .await
        .map_err(|e| tag_err(self.source.name(), e))?;
        let built = Arc::new(built);
        self.cache.put(Arc::clone(&built)).await;
        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_err_keeps_origin_aware_errors() {
        let e = tag_err("sheets", PainelError::table_not_found("vendas"));
        assert_eq!(e, PainelError::table_not_found("vendas"));

        let e = tag_err("sheets", PainelError::Data("header row missing".into()));
        assert_eq!(
            e,
            PainelError::source("sheets", "data issue: header row missing")
        );
    }
}
