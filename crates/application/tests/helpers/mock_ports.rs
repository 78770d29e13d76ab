#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use zonehost_application::ports::{QueryMetricsSink, RecursiveResolver, ZoneProvider, ZoneSource};
use zonehost_domain::{DomainError, ResponseCode, Zone, ZoneCollection};

pub struct InMemoryZoneProvider {
    zones: RwLock<Arc<ZoneCollection>>,
    hits: Mutex<HashMap<String, u64>>,
}

impl InMemoryZoneProvider {
    pub fn new(zones: Vec<Zone>) -> Self {
        let mut collection = ZoneCollection::new();
        for zone in zones {
            collection.insert(zone);
        }
        Self {
            zones: RwLock::new(Arc::new(collection)),
            hits: Mutex::new(HashMap::new()),
        }
    }

    pub fn hits_for(&self, cut: &str) -> u64 {
        self.hits.lock().unwrap().get(cut).copied().unwrap_or(0)
    }
}

impl ZoneProvider for InMemoryZoneProvider {
    fn snapshot(&self) -> Arc<ZoneCollection> {
        Arc::clone(&self.zones.read().unwrap())
    }

    fn replace(&self, zones: ZoneCollection) {
        *self.zones.write().unwrap() = Arc::new(zones);
    }

    fn record_hit(&self, cut: &str) {
        *self.hits.lock().unwrap().entry(cut.to_string()).or_insert(0) += 1;
    }

    fn hits(&self) -> Vec<(String, u64)> {
        let mut hits: Vec<_> = self
            .hits
            .lock()
            .unwrap()
            .iter()
            .map(|(cut, count)| (cut.clone(), *count))
            .collect();
        hits.sort();
        hits
    }
}

/// Scripted upstream: returns `reply` (or `error`) and remembers every query it saw.
pub struct MockRecursiveResolver {
    reply: Mutex<Result<Vec<u8>, DomainError>>,
    calls: Mutex<Vec<Vec<u8>>>,
}

impl MockRecursiveResolver {
    pub fn replying(reply: Vec<u8>) -> Self {
        Self {
            reply: Mutex::new(Ok(reply)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Mutex::new(Err(DomainError::TransportTimeout {
                server: "192.0.2.53:53".to_string(),
            })),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecursiveResolver for MockRecursiveResolver {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.calls.lock().unwrap().push(query.to_vec());
        self.reply.lock().unwrap().clone()
    }

    fn upstream(&self) -> String {
        "192.0.2.53:53".to_string()
    }
}

#[derive(Default)]
pub struct RecordingMetricsSink {
    recorded: Mutex<Vec<(String, ResponseCode)>>,
}

impl RecordingMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<(String, ResponseCode)> {
        self.recorded.lock().unwrap().clone()
    }
}

impl QueryMetricsSink for RecordingMetricsSink {
    fn record_query(&self, zone: &str, rcode: ResponseCode) {
        self.recorded.lock().unwrap().push((zone.to_string(), rcode));
    }

    fn outcomes(&self) -> Vec<(String, ResponseCode, u64)> {
        let mut counts: Vec<(String, ResponseCode, u64)> = Vec::new();
        for (zone, rcode) in self.recorded() {
            match counts.iter_mut().find(|(z, r, _)| *z == zone && *r == rcode) {
                Some(entry) => entry.2 += 1,
                None => counts.push((zone, rcode, 1)),
            }
        }
        counts
    }
}

pub struct StaticZoneSource {
    result: Mutex<Option<Result<Vec<Zone>, DomainError>>>,
}

impl StaticZoneSource {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            result: Mutex::new(Some(Ok(zones))),
        }
    }

    pub fn failing(file: &str) -> Self {
        Self {
            result: Mutex::new(Some(Err(DomainError::ZoneLoad {
                file: file.to_string(),
                reason: "unreadable".to_string(),
            }))),
        }
    }
}

#[async_trait]
impl ZoneSource for StaticZoneSource {
    async fn load_zones(&self) -> Result<ZoneCollection, DomainError> {
        let zones = self
            .result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))?;
        let mut collection = ZoneCollection::new();
        for zone in zones {
            collection.insert(zone);
        }
        Ok(collection)
    }
}
