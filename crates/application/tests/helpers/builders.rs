#![allow(dead_code)]

use std::net::{Ipv4Addr, Ipv6Addr};
use zonehost_domain::{
    QueryMessage, Question, RecordClass, RecordData, RecordType, ResourceRecord, Zone,
};

pub const TTL: u32 = 300;

pub struct ZoneBuilder {
    zone: Zone,
}

impl ZoneBuilder {
    pub fn new(origin: &str) -> Self {
        Self {
            zone: Zone::new(origin),
        }
    }

    pub fn record(mut self, name: &str, data: RecordData) -> Self {
        self.zone
            .insert(ResourceRecord::new(name, RecordClass::IN, TTL, data));
        self
    }

    pub fn soa(self) -> Self {
        let origin = self.zone.origin().to_string();
        let data = RecordData::SOA {
            mname: format!("ns1.{}", origin),
            rname: format!("hostmaster.{}", origin),
            serial: 2024010101,
            refresh: 7200,
            retry: 3600,
            expire: 1_209_600,
            minimum: 300,
        };
        self.record(&origin, data)
    }

    pub fn a(self, name: &str, ip: &str) -> Self {
        let ip: Ipv4Addr = ip.parse().unwrap();
        self.record(name, RecordData::A(ip))
    }

    pub fn aaaa(self, name: &str, ip: &str) -> Self {
        let ip: Ipv6Addr = ip.parse().unwrap();
        self.record(name, RecordData::AAAA(ip))
    }

    pub fn ns(self, name: &str, target: &str) -> Self {
        self.record(name, RecordData::NS(target.to_string()))
    }

    pub fn cname(self, name: &str, target: &str) -> Self {
        self.record(name, RecordData::CNAME(target.to_string()))
    }

    pub fn mx(self, name: &str, preference: u16, exchange: &str) -> Self {
        self.record(
            name,
            RecordData::MX {
                preference,
                exchange: exchange.to_string(),
            },
        )
    }

    pub fn srv(self, name: &str, port: u16, target: &str) -> Self {
        self.record(
            name,
            RecordData::SRV {
                priority: 10,
                weight: 5,
                port,
                target: target.to_string(),
            },
        )
    }

    pub fn build(self) -> Zone {
        self.zone
    }
}

pub fn query(name: &str, record_type: RecordType) -> QueryMessage {
    query_with_questions(vec![Question::new(name, record_type, RecordClass::IN)])
}

pub fn query_with_questions(questions: Vec<Question>) -> QueryMessage {
    // Header bytes only matter to the recursive path, which forwards them verbatim.
    let raw = vec![0xab, 0xcd, 0x01, 0x00, 0x00, questions.len() as u8, 0, 0, 0, 0, 0, 0];
    QueryMessage::new(0xabcd, questions, raw)
}
