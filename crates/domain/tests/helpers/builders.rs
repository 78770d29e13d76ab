#![allow(dead_code)]
use zonehost_domain::{RecordClass, RecordData, ResourceRecord, Zone};
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct ZoneBuilder {
    zone: Zone,
    ttl: u32,
}

impl ZoneBuilder {
    pub fn new(origin: &str) -> Self {
        Self {
            zone: Zone::new(origin),
            ttl: 300,
        }
    }

    fn push(mut self, name: &str, data: RecordData) -> Self {
        self.zone
            .insert(ResourceRecord::new(name, RecordClass::IN, self.ttl, data));
        self
    }

    pub fn soa(self) -> Self {
        let origin = self.zone.origin().to_string();
        let data = RecordData::SOA {
            mname: format!("ns1.{}", origin),
            rname: format!("hostmaster.{}", origin),
            serial: 1,
            refresh: 7200,
            retry: 3600,
            expire: 1_209_600,
            minimum: 300,
        };
        self.push(&origin, data)
    }

    pub fn a(self, name: &str, ip: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().unwrap();
        self.push(name, RecordData::A(ip))
    }

    pub fn aaaa(self, name: &str, ip: &str) -> Self {
        let ip: Ipv6Addr = ip.parse().unwrap();
        self.push(name, RecordData::AAAA(ip))
    }

    pub fn ns(self, name: &str, target: &str) -> Self {
        self.push(name, RecordData::NS(target.to_string()))
    }

    pub fn cname(self, name: &str, target: &str) -> Self {
        self.push(name, RecordData::CNAME(target.to_string()))
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}
