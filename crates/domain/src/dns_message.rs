use crate::dns_record::{RecordClass, RecordType, ResourceRecord};
use std::fmt;
use std::sync::Arc;

/// Length of the fixed DNS message header.
pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Unknown(u16),
}

impl ResponseCode {
    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    /// RCODE carried in the low nibble of the fourth header byte.
    ///
    /// Extended RCODE bits from EDNS are not considered.
    pub fn from_wire_header(message: &[u8]) -> Option<Self> {
        if message.len() < HEADER_LEN {
            return None;
        }
        Some(Self::from_u16(u16::from(message[3] & 0x0F)))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    Query,
    Status,
    Notify,
    Update,
    Unknown(u8),
}

impl OpCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            OpCode::Query => 0,
            OpCode::Status => 2,
            OpCode::Notify => 4,
            OpCode::Update => 5,
            OpCode::Unknown(code) => *code,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => OpCode::Query,
            2 => OpCode::Status,
            4 => OpCode::Notify,
            5 => OpCode::Update,
            other => OpCode::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Name as received, original case.
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }
}

/// A parsed inbound query.
#[derive(Debug, Clone)]
pub struct QueryMessage {
    pub id: u16,
    pub op_code: OpCode,
    pub recursion_desired: bool,
    pub checking_disabled: bool,
    pub questions: Vec<Question>,
    /// The query exactly as it arrived on the wire; forwarded verbatim when recursing.
    pub raw: Arc<[u8]>,
}

impl QueryMessage {
    pub fn new(id: u16, questions: Vec<Question>, raw: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id,
            op_code: OpCode::Query,
            recursion_desired: true,
            checking_disabled: false,
            questions,
            raw: raw.into(),
        }
    }
}

/// A reply assembled locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    pub id: u16,
    pub op_code: OpCode,
    pub recursion_desired: bool,
    pub checking_disabled: bool,
    pub authoritative: bool,
    pub recursion_available: bool,
    pub rcode: ResponseCode,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl ReplyMessage {
    /// Empty NOERROR reply echoing the query header and its first question.
    pub fn reply_to(query: &QueryMessage) -> Self {
        Self {
            id: query.id,
            op_code: query.op_code,
            recursion_desired: query.recursion_desired,
            checking_disabled: query.checking_disabled,
            authoritative: false,
            recursion_available: false,
            rcode: ResponseCode::NoError,
            questions: query.questions.iter().take(1).cloned().collect(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn with_rcode(query: &QueryMessage, rcode: ResponseCode) -> Self {
        Self {
            rcode,
            ..Self::reply_to(query)
        }
    }

    /// FORMERR reply echoing every question of the offending query.
    pub fn format_error(query: &QueryMessage) -> Self {
        Self {
            questions: query.questions.clone(),
            ..Self::with_rcode(query, ResponseCode::FormErr)
        }
    }
}
