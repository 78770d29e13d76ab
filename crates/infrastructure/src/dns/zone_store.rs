use arc_swap::ArcSwap;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use zonehost_application::ports::ZoneProvider;
use zonehost_domain::ZoneCollection;

/// Live zone set behind an atomically swappable pointer.
///
/// Queries load the current `Arc<ZoneCollection>` once and keep it for their
/// whole run; a reload publishes a new collection without waiting for them.
/// Hit counters live in their own map and never touch the zone pointer.
pub struct ZoneStore {
    zones: ArcSwap<ZoneCollection>,
    hits: DashMap<String, u64, FxBuildHasher>,
}

impl ZoneStore {
    pub fn new(zones: ZoneCollection) -> Self {
        Self {
            zones: ArcSwap::from_pointee(zones),
            hits: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn empty() -> Self {
        Self::new(ZoneCollection::new())
    }
}

impl Default for ZoneStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl ZoneProvider for ZoneStore {
    fn snapshot(&self) -> Arc<ZoneCollection> {
        self.zones.load_full()
    }

    fn replace(&self, zones: ZoneCollection) {
        self.zones.store(Arc::new(zones));
    }

    fn record_hit(&self, cut: &str) {
        if let Some(mut count) = self.hits.get_mut(cut) {
            *count += 1;
            return;
        }
        *self.hits.entry(cut.to_string()).or_insert(0) += 1;
    }

    fn hits(&self) -> Vec<(String, u64)> {
        let mut hits: Vec<(String, u64)> = self
            .hits
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        hits.sort_unstable();
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zonehost_domain::Zone;

    fn collection(origins: &[&str]) -> ZoneCollection {
        let mut zones = ZoneCollection::new();
        for origin in origins {
            zones.insert(Zone::new(origin));
        }
        zones
    }

    #[test]
    fn test_replace_does_not_affect_held_snapshot() {
        let store = ZoneStore::new(collection(&["example.com."]));
        let held = store.snapshot();

        store.replace(collection(&["example.org.", "example.net."]));

        assert_eq!(held.len(), 1);
        assert!(held.get("example.com.").is_some());
        assert_eq!(store.snapshot().len(), 2);
        assert!(store.snapshot().get("example.com.").is_none());
    }

    #[test]
    fn test_hits_are_counted_per_cut_and_sorted() {
        let store = ZoneStore::empty();
        store.record_hit("example.org.");
        store.record_hit("example.com.");
        store.record_hit("example.org.");

        assert_eq!(
            store.hits(),
            vec![
                ("example.com.".to_string(), 1),
                ("example.org.".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_hits_survive_zone_replacement() {
        let store = ZoneStore::new(collection(&["example.com."]));
        store.record_hit("example.com.");
        store.replace(ZoneCollection::new());

        assert_eq!(store.hits(), vec![("example.com.".to_string(), 1)]);
    }

    #[test]
    fn test_concurrent_hits_are_not_lost() {
        let store = Arc::new(ZoneStore::empty());
        let threads: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        store.record_hit("example.com.");
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        assert_eq!(store.hits(), vec![("example.com.".to_string(), 4000)]);
    }
}
