use crate::dns::codec::{self, header_only_reply, WireHeader, MAX_UDP_PAYLOAD};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};
use zonehost_application::use_cases::{QueryOutcome, ResolveQueryUseCase};
use zonehost_domain::{OpCode, ReplyMessage, ResponseCode};

/// Turns raw query bytes into raw reply bytes: decode, resolve, encode.
pub struct DnsRequestHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsRequestHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Reply for a query received over a stream transport. `None` means the
    /// input is dropped without a reply.
    pub async fn handle(&self, bytes: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        match self.resolve(bytes, client).await? {
            Resolved::Wire(reply) => Some(reply),
            Resolved::Local(reply) => self.encode(&reply),
        }
    }

    /// Like [`handle`](Self::handle), but local replies that do not fit a
    /// plain UDP payload go out truncated.
    pub async fn handle_udp(&self, bytes: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        match self.resolve(bytes, client).await? {
            Resolved::Wire(reply) => Some(reply),
            Resolved::Local(reply) => {
                let encoded = self.encode(&reply)?;
                if encoded.len() <= MAX_UDP_PAYLOAD {
                    return Some(encoded);
                }
                debug!(
                    client = %client,
                    size = encoded.len(),
                    "Reply exceeds UDP payload, sending truncated"
                );
                match codec::encode_truncated_reply(&reply) {
                    Ok(truncated) => Some(truncated),
                    Err(e) => {
                        error!(error = %e, "Failed to encode truncated reply");
                        header_only_reply(bytes, ResponseCode::ServFail)
                    }
                }
            }
        }
    }

    async fn resolve(&self, bytes: &[u8], client: SocketAddr) -> Option<Resolved> {
        let Some(header) = WireHeader::parse(bytes) else {
            debug!(client = %client, len = bytes.len(), "Dropping runt message");
            return None;
        };

        if header.is_response {
            debug!(client = %client, id = header.id, "Dropping unsolicited response");
            return None;
        }

        if header.op_code != OpCode::Query {
            debug!(client = %client, op_code = ?header.op_code, "Opcode not implemented");
            return header_only_reply(bytes, ResponseCode::NotImp).map(Resolved::Wire);
        }

        let query = match codec::decode_query(bytes) {
            Ok(query) => query,
            Err(e) => {
                debug!(client = %client, error = %e, "Undecodable query");
                return header_only_reply(bytes, ResponseCode::FormErr).map(Resolved::Wire);
            }
        };

        match self.use_case.execute(&query).await {
            QueryOutcome::Local(reply) => Some(Resolved::Local(reply)),
            QueryOutcome::Forwarded(reply) => Some(Resolved::Wire(reply)),
        }
    }

    fn encode(&self, reply: &ReplyMessage) -> Option<Vec<u8>> {
        match codec::encode_reply(reply) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, id = reply.id, "Failed to encode reply");
                let mut fallback = ReplyMessage {
                    answers: Vec::new(),
                    authorities: Vec::new(),
                    additionals: Vec::new(),
                    ..reply.clone()
                };
                fallback.rcode = ResponseCode::ServFail;
                codec::encode_reply(&fallback).ok()
            }
        }
    }
}

enum Resolved {
    /// Bytes ready to send.
    Wire(Vec<u8>),
    Local(ReplyMessage),
}
