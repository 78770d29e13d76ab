//! Zonehost Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod name;
pub mod query_stats;
pub mod zone;
pub mod zone_collection;

pub use config::{CliOverrides, Config};
pub use dns_message::{OpCode, QueryMessage, Question, ReplyMessage, ResponseCode};
pub use dns_record::{RecordClass, RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use query_stats::QueryStats;
pub use zone::{RrsetKey, Zone};
pub use zone_collection::{ZoneCollection, ZoneMatch};
