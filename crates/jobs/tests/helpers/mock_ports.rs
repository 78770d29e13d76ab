#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use zonehost_application::ports::{QueryMetricsSink, ZoneProvider, ZoneSource};
use zonehost_domain::{DomainError, ResponseCode, Zone, ZoneCollection};

/// Zone source that yields `example.com.` and counts its loads.
pub struct CountingZoneSource {
    loads: AtomicU64,
    should_fail: AtomicBool,
}

impl CountingZoneSource {
    pub fn new() -> Self {
        Self {
            loads: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let source = Self::new();
        source.should_fail.store(true, Ordering::SeqCst);
        source
    }

    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneSource for CountingZoneSource {
    async fn load_zones(&self) -> Result<ZoneCollection, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ZoneLoad {
                file: "example.com.toml".to_string(),
                reason: "unreadable".to_string(),
            });
        }
        let mut zones = ZoneCollection::new();
        zones.insert(Zone::new("example.com."));
        Ok(zones)
    }
}

pub struct SharedZoneProvider {
    zones: Mutex<Arc<ZoneCollection>>,
    replacements: AtomicU64,
}

impl SharedZoneProvider {
    pub fn new() -> Self {
        Self {
            zones: Mutex::new(Arc::new(ZoneCollection::new())),
            replacements: AtomicU64::new(0),
        }
    }

    pub fn replacement_count(&self) -> u64 {
        self.replacements.load(Ordering::SeqCst)
    }
}

impl ZoneProvider for SharedZoneProvider {
    fn snapshot(&self) -> Arc<ZoneCollection> {
        Arc::clone(&self.zones.lock().unwrap())
    }

    fn replace(&self, zones: ZoneCollection) {
        *self.zones.lock().unwrap() = Arc::new(zones);
        self.replacements.fetch_add(1, Ordering::SeqCst);
    }

    fn record_hit(&self, _cut: &str) {}

    fn hits(&self) -> Vec<(String, u64)> {
        vec![("example.com.".to_string(), 3)]
    }
}

/// Metrics sink with fixed outcomes that counts how often it is read.
pub struct FixedMetricsSink {
    reads: AtomicU64,
}

impl FixedMetricsSink {
    pub fn new() -> Self {
        Self {
            reads: AtomicU64::new(0),
        }
    }

    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl QueryMetricsSink for FixedMetricsSink {
    fn record_query(&self, _zone: &str, _rcode: ResponseCode) {}

    fn outcomes(&self) -> Vec<(String, ResponseCode, u64)> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        vec![
            (String::new(), ResponseCode::Refused, 1),
            ("example.com.".to_string(), ResponseCode::NoError, 2),
        ]
    }
}
