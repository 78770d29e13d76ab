use std::sync::Arc;
use zonehost_domain::ZoneCollection;

/// Live zone set plus the per-zone hit counters.
pub trait ZoneProvider: Send + Sync {
    /// Consistent view of the loaded zones. Taken once per query and held
    /// until the reply is built.
    fn snapshot(&self) -> Arc<ZoneCollection>;

    /// Swaps in a new zone set. Readers see either the old or the new set.
    fn replace(&self, zones: ZoneCollection);

    fn record_hit(&self, cut: &str);

    /// Hit counters sorted by zone cut.
    fn hits(&self) -> Vec<(String, u64)>;
}
