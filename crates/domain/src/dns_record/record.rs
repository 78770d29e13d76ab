use super::{RecordClass, RecordData, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub class: RecordClass,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, class: RecordClass, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            class,
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// Copy of this record answering for a different owner name.
    pub fn with_owner(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }
}
