//! Mapping between domain records and `hickory_proto::rr` records.

use hickory_proto::rr::rdata::{self, MX, SOA, SRV, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType as HickoryRecordType};
use zonehost_domain::{DomainError, RecordClass, RecordData, RecordType, ResourceRecord};

pub struct RecordMapper;

impl RecordMapper {
    pub fn to_hickory(record: &ResourceRecord) -> Result<Record, DomainError> {
        let name = Self::to_hickory_name(&record.name)?;
        let rdata = Self::to_hickory_rdata(&record.data)?;

        let mut hickory = Record::from_rdata(name, record.ttl, rdata);
        hickory.set_dns_class(Self::to_hickory_class(record.class));
        Ok(hickory)
    }

    pub fn to_hickory_name(name: &str) -> Result<Name, DomainError> {
        Name::from_ascii(name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })
    }

    pub fn to_hickory_type(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    pub fn to_hickory_class(class: RecordClass) -> DNSClass {
        DNSClass::from(class.to_u16())
    }

    fn to_hickory_rdata(data: &RecordData) -> Result<RData, DomainError> {
        let rdata = match data {
            RecordData::A(ip) => RData::A(rdata::A(*ip)),
            RecordData::AAAA(ip) => RData::AAAA(rdata::AAAA(*ip)),
            RecordData::NS(target) => RData::NS(rdata::NS(Self::to_hickory_name(target)?)),
            RecordData::CNAME(target) => {
                RData::CNAME(rdata::CNAME(Self::to_hickory_name(target)?))
            }
            RecordData::PTR(target) => RData::PTR(rdata::PTR(Self::to_hickory_name(target)?)),
            RecordData::MX {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, Self::to_hickory_name(exchange)?)),
            RecordData::TXT(strings) => RData::TXT(TXT::new(strings.clone())),
            RecordData::SRV {
                priority,
                weight,
                port,
                target,
            } => RData::SRV(SRV::new(
                *priority,
                *weight,
                *port,
                Self::to_hickory_name(target)?,
            )),
            RecordData::SOA {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => RData::SOA(SOA::new(
                Self::to_hickory_name(mname)?,
                Self::to_hickory_name(rname)?,
                *serial,
                *refresh,
                *retry,
                *expire,
                *minimum,
            )),
        };
        Ok(rdata)
    }
}
