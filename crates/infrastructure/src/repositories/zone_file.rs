//! TOML zone file format.
//!
//! ```toml
//! origin = "example.com."
//! ttl = 3600
//!
//! [[records]]
//! name = "@"
//! type = "SOA"
//! value = "ns1 hostmaster 2024010101 7200 3600 1209600 300"
//! ```
//!
//! Owner and target names without a trailing dot are relative to `origin`.

use serde::Deserialize;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use zonehost_domain::name::{absolute_name, normalize_name};
use zonehost_domain::{DomainError, RecordClass, RecordData, RecordType, ResourceRecord, Zone};

const DEFAULT_TTL: u32 = 3600;
const MAX_TXT_STRING_LEN: usize = 255;

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneFile {
    pub origin: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default)]
    pub records: Vec<ZoneFileRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneFileRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub value: String,

    #[serde(default)]
    pub class: Option<String>,

    #[serde(default)]
    pub ttl: Option<u32>,
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}

impl ZoneFile {
    /// `file` only labels errors.
    pub fn parse(contents: &str, file: &str) -> Result<Self, DomainError> {
        toml::from_str(contents).map_err(|e| DomainError::ZoneLoad {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    /// Builds the zone. The first bad record aborts the whole file.
    pub fn into_zone(self, file: &str) -> Result<Zone, DomainError> {
        let origin = normalize_name(&self.origin);
        let mut zone = Zone::new(&origin);

        for (index, entry) in self.records.iter().enumerate() {
            let record = entry
                .to_record(&origin, self.ttl)
                .map_err(|reason| DomainError::ZoneLoad {
                    file: file.to_string(),
                    reason: format!(
                        "record #{} ({} {}): {}",
                        index + 1,
                        entry.name,
                        entry.record_type,
                        reason
                    ),
                })?;
            zone.insert(record);
        }

        Ok(zone)
    }
}

impl ZoneFileRecord {
    fn to_record(&self, origin: &str, default_ttl: u32) -> Result<ResourceRecord, String> {
        let owner = absolute_name(self.name.trim(), origin);
        if !is_within(&owner, origin) {
            return Err(format!("owner {} is outside zone {}", owner, origin));
        }

        let record_type = RecordType::from_str(self.record_type.trim())?;
        let class = match &self.class {
            Some(class) => RecordClass::from_str(class.trim())?,
            None => RecordClass::IN,
        };
        let data = parse_rdata(record_type, self.value.trim(), origin)?;

        Ok(ResourceRecord::new(
            owner,
            class,
            self.ttl.unwrap_or(default_ttl),
            data,
        ))
    }
}

fn is_within(name: &str, origin: &str) -> bool {
    origin == "." || name == origin || name.ends_with(&format!(".{}", origin))
}

fn parse_rdata(record_type: RecordType, value: &str, origin: &str) -> Result<RecordData, String> {
    let fields: Vec<&str> = value.split_whitespace().collect();
    let field_count = |expected: usize| {
        if fields.len() == expected {
            Ok(())
        } else {
            Err(format!(
                "expected {} fields for {}, found {}",
                expected,
                record_type,
                fields.len()
            ))
        }
    };

    let data = match record_type {
        RecordType::A => RecordData::A(
            Ipv4Addr::from_str(value).map_err(|e| format!("invalid IPv4 address: {}", e))?,
        ),
        RecordType::AAAA => RecordData::AAAA(
            Ipv6Addr::from_str(value).map_err(|e| format!("invalid IPv6 address: {}", e))?,
        ),
        RecordType::NS => {
            field_count(1)?;
            RecordData::NS(absolute_name(fields[0], origin))
        }
        RecordType::CNAME => {
            field_count(1)?;
            RecordData::CNAME(absolute_name(fields[0], origin))
        }
        RecordType::PTR => {
            field_count(1)?;
            RecordData::PTR(absolute_name(fields[0], origin))
        }
        RecordType::MX => {
            field_count(2)?;
            RecordData::MX {
                preference: parse_number(fields[0], "preference")?,
                exchange: absolute_name(fields[1], origin),
            }
        }
        RecordType::SRV => {
            field_count(4)?;
            RecordData::SRV {
                priority: parse_number(fields[0], "priority")?,
                weight: parse_number(fields[1], "weight")?,
                port: parse_number(fields[2], "port")?,
                target: absolute_name(fields[3], origin),
            }
        }
        RecordType::SOA => {
            field_count(7)?;
            RecordData::SOA {
                mname: absolute_name(fields[0], origin),
                rname: absolute_name(fields[1], origin),
                serial: parse_number(fields[2], "serial")?,
                refresh: parse_number(fields[3], "refresh")?,
                retry: parse_number(fields[4], "retry")?,
                expire: parse_number(fields[5], "expire")?,
                minimum: parse_number(fields[6], "minimum")?,
            }
        }
        RecordType::TXT => {
            let text = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            if text.len() > MAX_TXT_STRING_LEN {
                return Err(format!(
                    "TXT string is {} bytes, limit is {}",
                    text.len(),
                    MAX_TXT_STRING_LEN
                ));
            }
            RecordData::TXT(vec![text.to_string()])
        }
        RecordType::ANY | RecordType::Unknown(_) => {
            return Err(format!("record type {} cannot be loaded", record_type));
        }
    };

    Ok(data)
}

fn parse_number<T: FromStr>(field: &str, what: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    field
        .parse::<T>()
        .map_err(|e| format!("invalid {} '{}': {}", what, field, e))
}
