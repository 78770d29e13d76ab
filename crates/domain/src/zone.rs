use crate::dns_record::{RecordClass, RecordType, ResourceRecord};
use crate::name::normalize_name;
use rustc_hash::FxHashMap;

/// Key of the per-owner record list: owner name and class.
///
/// An RRset is the subsequence of that list sharing a record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RrsetKey {
    pub name: String,
    pub class: RecordClass,
}

impl RrsetKey {
    pub fn new(name: &str, class: RecordClass) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            class,
        }
    }
}

/// Records at or below one zone cut.
///
/// Record order is preserved from load. The zone is never mutated once it has
/// been handed to a `ZoneCollection`.
#[derive(Debug, Clone)]
pub struct Zone {
    origin: String,
    records: FxHashMap<RrsetKey, Vec<ResourceRecord>>,
    record_count: usize,
}

impl Zone {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: normalize_name(origin),
            records: FxHashMap::default(),
            record_count: 0,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Adds a record; the owner name is stored lowercased.
    pub fn insert(&mut self, mut record: ResourceRecord) {
        record.name = normalize_name(&record.name);
        let key = RrsetKey::new(&record.name, record.class);
        self.records.entry(key).or_default().push(record);
        self.record_count += 1;
    }

    /// Every record owned by `name` in `class`, any type.
    pub fn records_at(&self, name: &str, class: RecordClass) -> &[ResourceRecord] {
        self.records
            .get(&RrsetKey::new(name, class))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The RRset (`name`, `record_type`, `class`), in load order.
    pub fn rrset(
        &self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
    ) -> impl Iterator<Item = &ResourceRecord> + '_ {
        self.records_at(name, class)
            .iter()
            .filter(move |r| r.record_type() == record_type)
    }

    pub fn has_rrset(&self, name: &str, record_type: RecordType, class: RecordClass) -> bool {
        self.rrset(name, record_type, class).next().is_some()
    }

    pub fn soa(&self) -> Vec<ResourceRecord> {
        self.rrset(&self.origin, RecordType::SOA, RecordClass::IN)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_record::RecordData;
    use std::net::Ipv4Addr;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut zone = Zone::new("Example.com");
        zone.insert(ResourceRecord::new(
            "WWW.example.com.",
            RecordClass::IN,
            300,
            RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
        ));

        assert_eq!(zone.origin(), "example.com.");
        assert_eq!(zone.records_at("www.EXAMPLE.com.", RecordClass::IN).len(), 1);
        assert_eq!(zone.records_at("www.example.com.", RecordClass::CH).len(), 0);
    }

    #[test]
    fn test_rrset_filters_by_type_and_keeps_order() {
        let mut zone = Zone::new("example.com.");
        for last in [3u8, 1, 2] {
            zone.insert(ResourceRecord::new(
                "www.example.com.",
                RecordClass::IN,
                300,
                RecordData::A(Ipv4Addr::new(192, 0, 2, last)),
            ));
        }
        zone.insert(ResourceRecord::new(
            "www.example.com.",
            RecordClass::IN,
            300,
            RecordData::TXT(vec!["hello".to_string()]),
        ));

        let order: Vec<_> = zone
            .rrset("www.example.com.", RecordType::A, RecordClass::IN)
            .map(|r| r.data.clone())
            .collect();
        assert_eq!(
            order,
            vec![
                RecordData::A(Ipv4Addr::new(192, 0, 2, 3)),
                RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
                RecordData::A(Ipv4Addr::new(192, 0, 2, 2)),
            ]
        );
        assert!(!zone.has_rrset("www.example.com.", RecordType::MX, RecordClass::IN));
        assert_eq!(zone.len(), 4);
    }
}
