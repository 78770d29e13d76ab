use crate::dns_record::RecordType;
use crate::name::{normalize_name, parent_name};
use crate::zone::Zone;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Result of matching a name against the loaded zones.
#[derive(Debug, Clone, Copy)]
pub struct ZoneMatch<'a> {
    pub zone: &'a Zone,
    /// The zone cut, fully qualified and lowercased.
    pub cut: &'a str,
}

/// Set of loaded zones keyed by their cut name.
#[derive(Debug, Clone, Default)]
pub struct ZoneCollection {
    zones: FxHashMap<String, Arc<Zone>>,
}

impl ZoneCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `zone`, returning the zone it replaced at the same cut, if any.
    pub fn insert(&mut self, zone: Zone) -> Option<Arc<Zone>> {
        self.zones.insert(zone.origin().to_string(), Arc::new(zone))
    }

    pub fn get(&self, cut: &str) -> Option<&Zone> {
        self.zones.get(&normalize_name(cut)).map(Arc::as_ref)
    }

    /// Most specific zone whose cut is a suffix of `name`.
    ///
    /// Tries the full name, then strips one label at a time down to the root.
    /// `name` must already be normalized. The record type does not influence
    /// the default matching; it is part of the contract so callers always
    /// state what they are looking for.
    pub fn find(&self, name: &str, _record_type: RecordType) -> Option<ZoneMatch<'_>> {
        let mut candidate = Some(name);
        while let Some(current) = candidate {
            if let Some((cut, zone)) = self.zones.get_key_value(current) {
                return Some(ZoneMatch { zone, cut });
            }
            candidate = parent_name(current);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn cuts(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }
}
