use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use zonehost_application::ports::QueryMetricsSink;
use zonehost_domain::ResponseCode;

/// Process-lifetime query counters keyed by zone cut and rcode.
pub struct InMemoryQueryMetrics {
    total: AtomicU64,
    by_zone: DashMap<String, Vec<(ResponseCode, u64)>, FxBuildHasher>,
}

impl InMemoryQueryMetrics {
    pub fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            by_zone: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

impl Default for InMemoryQueryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn bump(counts: &mut Vec<(ResponseCode, u64)>, rcode: ResponseCode) {
    match counts.iter_mut().find(|(code, _)| *code == rcode) {
        Some((_, count)) => *count += 1,
        None => counts.push((rcode, 1)),
    }
}

impl QueryMetricsSink for InMemoryQueryMetrics {
    fn record_query(&self, zone: &str, rcode: ResponseCode) {
        self.total.fetch_add(1, Ordering::Relaxed);

        if let Some(mut counts) = self.by_zone.get_mut(zone) {
            bump(&mut counts, rcode);
            return;
        }
        bump(&mut self.by_zone.entry(zone.to_string()).or_default(), rcode);
    }

    fn outcomes(&self) -> Vec<(String, ResponseCode, u64)> {
        let mut outcomes: Vec<(String, ResponseCode, u64)> = self
            .by_zone
            .iter()
            .flat_map(|entry| {
                let zone = entry.key().clone();
                entry
                    .value()
                    .iter()
                    .map(move |(rcode, count)| (zone.clone(), *rcode, *count))
                    .collect::<Vec<_>>()
            })
            .collect();
        outcomes.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.to_u16().cmp(&b.1.to_u16())));
        outcomes
    }
}
