use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use painel_types::{CacheConfig, Snapshot};

/// Fixed key of the single snapshot slot.
pub const SLOT_KEY: &str = "dashboard_data";

/// Single-slot time-to-live memo of the most recently built snapshot.
///
/// `get` and `put` are independent calls: two callers that both miss will both rebuild
/// and both store, the last write winning. Builds are pure functions of upstream data,
/// so the redundant work never produces conflicting state.
pub struct ResultCache {
    // `None` when caching is disabled (TTL = 0).
    slot: Option<Cache<&'static str, Arc<Snapshot>>>,
    cfg: CacheConfig,
}

impl ResultCache {
    /// Create a cache from configuration. A zero TTL disables caching entirely.
    #[must_use]
    pub fn new(cfg: &CacheConfig) -> Self {
        let slot = cfg
            .ttl()
            .map(|ttl| Cache::builder().max_capacity(1).time_to_live(ttl).build());
        Self { slot, cfg: *cfg }
    }

    /// The live snapshot, if one was stored less than one TTL ago.
    pub async fn get(&self) -> Option<Arc<Snapshot>> {
        let slot = self.slot.as_ref()?;
        let hit = slot.get(SLOT_KEY).await;
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "painel::cache", hit = hit.is_some(), "snapshot slot read");
        hit
    }

    /// Store `snapshot` with a fresh expiry, replacing whatever the slot held.
    pub async fn put(&self, snapshot: Arc<Snapshot>) {
        if let Some(slot) = &self.slot {
            slot.insert(SLOT_KEY, snapshot).await;
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "painel::cache", ttl_ms = self.cfg.ttl_ms, "snapshot slot written");
        }
    }

    /// Empty the slot so the next read misses.
    pub async fn invalidate(&self) {
        if let Some(slot) = &self.slot {
            slot.invalidate(SLOT_KEY).await;
        }
    }

    /// Whether snapshots are retained at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.slot.is_some()
    }

    /// Configured time-to-live, `None` when disabled.
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        self.cfg.ttl()
    }

    /// Name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        "ResultCache"
    }

    /// Configuration as JSON, for diagnostics.
    #[must_use]
    pub fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "key": SLOT_KEY,
            "ttl_ms": self.cfg.ttl_ms,
        })
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("ttl_ms", &self.cfg.ttl_ms)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
