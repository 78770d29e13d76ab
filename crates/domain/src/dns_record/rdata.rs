use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific record data, one variant per record kind.
///
/// Domain names held in the data (targets, exchanges, SOA names) are stored
/// fully qualified and lowercased by the zone loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    PTR(String),
    MX {
        preference: u16,
        exchange: String,
    },
    TXT(Vec<String>),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    SOA {
        mname: String,
        rname: String,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::NS(_) => RecordType::NS,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
            RecordData::SRV { .. } => RecordType::SRV,
            RecordData::SOA { .. } => RecordType::SOA,
        }
    }

    /// Name this record points at, for the kinds that point at one.
    pub fn target(&self) -> Option<&str> {
        match self {
            RecordData::NS(target)
            | RecordData::CNAME(target)
            | RecordData::PTR(target)
            | RecordData::SRV { target, .. } => Some(target),
            RecordData::MX { exchange, .. } => Some(exchange),
            _ => None,
        }
    }
}
