use zonehost_domain::dns_message::HEADER_LEN;
use zonehost_domain::{OpCode, ResponseCode};

const FLAG_QR: u8 = 0x80;
const MASK_OPCODE: u8 = 0x78;
const FLAG_RD: u8 = 0x01;
const FLAG_TC: u8 = 0x02;
const FLAG_CD: u8 = 0x10;

/// Fields read straight from the fixed header, without decoding the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireHeader {
    pub id: u16,
    pub is_response: bool,
    pub op_code: OpCode,
    pub truncated: bool,
    pub rcode: ResponseCode,
}

impl WireHeader {
    pub fn parse(message: &[u8]) -> Option<Self> {
        if message.len() < HEADER_LEN {
            return None;
        }
        Some(Self {
            id: u16::from_be_bytes([message[0], message[1]]),
            is_response: message[2] & FLAG_QR != 0,
            op_code: OpCode::from_u8((message[2] & MASK_OPCODE) >> 3),
            truncated: message[2] & FLAG_TC != 0,
            rcode: ResponseCode::from_u16(u16::from(message[3] & 0x0F)),
        })
    }
}

/// Header-only reply to `query` carrying `rcode`: ID, opcode, RD and CD are
/// echoed, every section is empty. `None` when `query` has no full header.
pub fn header_only_reply(query: &[u8], rcode: ResponseCode) -> Option<Vec<u8>> {
    if query.len() < HEADER_LEN {
        return None;
    }

    let mut reply = vec![0u8; HEADER_LEN];
    reply[0] = query[0];
    reply[1] = query[1];
    reply[2] = FLAG_QR | (query[2] & (MASK_OPCODE | FLAG_RD));
    reply[3] = (query[3] & FLAG_CD) | (rcode.to_u16() & 0x0F) as u8;
    Some(reply)
}
