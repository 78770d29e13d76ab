//! Conversion between wire-format DNS messages and the domain message types.
//!
//! Full messages go through `hickory-proto`. Replies to input that cannot be
//! decoded are built straight from the 12-byte header.

mod header;
mod record_map;

pub use header::{header_only_reply, WireHeader};
pub use record_map::RecordMapper;

use hickory_proto::op::{
    Message, MessageType, OpCode as HickoryOpCode, Query, ResponseCode as HickoryResponseCode,
};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use zonehost_domain::{
    DomainError, OpCode, QueryMessage, Question, RecordClass, RecordType, ReplyMessage,
    ResponseCode,
};

/// Replies longer than this are truncated when sent over UDP.
pub const MAX_UDP_PAYLOAD: usize = 512;

/// Parses a query. `raw` is kept so the query can be forwarded unmodified.
pub fn decode_query(raw: &[u8]) -> Result<QueryMessage, DomainError> {
    let message = Message::from_vec(raw)
        .map_err(|e| DomainError::MalformedMessage(format!("Failed to parse query: {}", e)))?;

    if message.message_type() != MessageType::Query {
        return Err(DomainError::MalformedMessage(
            "Message is a response, not a query".to_string(),
        ));
    }

    let questions = message
        .queries()
        .iter()
        .map(|query| {
            Question::new(
                query.name().to_ascii(),
                RecordType::from_u16(u16::from(query.query_type())),
                RecordClass::from_u16(u16::from(query.query_class())),
            )
        })
        .collect();

    let mut query = QueryMessage::new(message.id(), questions, raw.to_vec());
    query.op_code = op_code_from_hickory(message.op_code());
    query.recursion_desired = message.recursion_desired();
    query.checking_disabled = message.checking_disabled();
    Ok(query)
}

/// Serializes a locally built reply.
pub fn encode_reply(reply: &ReplyMessage) -> Result<Vec<u8>, DomainError> {
    let message = build_message(reply, false)?;
    serialize_message(&message)
}

/// Serializes `reply` with its record sections emptied and the TC bit set,
/// telling the client to retry over TCP.
pub fn encode_truncated_reply(reply: &ReplyMessage) -> Result<Vec<u8>, DomainError> {
    let message = build_message(reply, true)?;
    serialize_message(&message)
}

fn build_message(reply: &ReplyMessage, truncated: bool) -> Result<Message, DomainError> {
    let mut message = Message::new(
        reply.id,
        MessageType::Response,
        op_code_to_hickory(reply.op_code),
    );
    message.set_recursion_desired(reply.recursion_desired);
    message.set_checking_disabled(reply.checking_disabled);
    message.set_authoritative(reply.authoritative);
    message.set_recursion_available(reply.recursion_available);
    message.set_response_code(response_code_to_hickory(reply.rcode));

    for question in &reply.questions {
        let mut query = Query::new();
        query.set_name(RecordMapper::to_hickory_name(&question.name)?);
        query.set_query_type(RecordMapper::to_hickory_type(question.record_type));
        query.set_query_class(RecordMapper::to_hickory_class(question.class));
        message.add_query(query);
    }

    if truncated {
        message.set_truncated(true);
        return Ok(message);
    }

    for record in &reply.answers {
        message.add_answer(RecordMapper::to_hickory(record)?);
    }
    for record in &reply.authorities {
        message.add_name_server(RecordMapper::to_hickory(record)?);
    }
    for record in &reply.additionals {
        message.add_additional(RecordMapper::to_hickory(record)?);
    }

    Ok(message)
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(MAX_UDP_PAYLOAD);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::MalformedMessage(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}

fn op_code_from_hickory(op_code: HickoryOpCode) -> OpCode {
    match op_code {
        HickoryOpCode::Query => OpCode::Query,
        HickoryOpCode::Status => OpCode::Status,
        HickoryOpCode::Notify => OpCode::Notify,
        HickoryOpCode::Update => OpCode::Update,
        #[allow(unreachable_patterns)]
        other => OpCode::from_u8(u8::from(other)),
    }
}

fn op_code_to_hickory(op_code: OpCode) -> HickoryOpCode {
    match op_code {
        OpCode::Status => HickoryOpCode::Status,
        OpCode::Notify => HickoryOpCode::Notify,
        OpCode::Update => HickoryOpCode::Update,
        OpCode::Query | OpCode::Unknown(_) => HickoryOpCode::Query,
    }
}

fn response_code_to_hickory(rcode: ResponseCode) -> HickoryResponseCode {
    match rcode {
        ResponseCode::NoError => HickoryResponseCode::NoError,
        ResponseCode::FormErr => HickoryResponseCode::FormErr,
        ResponseCode::ServFail => HickoryResponseCode::ServFail,
        ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
        ResponseCode::NotImp => HickoryResponseCode::NotImp,
        ResponseCode::Refused => HickoryResponseCode::Refused,
        ResponseCode::Unknown(code) => HickoryResponseCode::Unknown(code),
    }
}
