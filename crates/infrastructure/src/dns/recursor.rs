use crate::dns::codec::WireHeader;
use crate::dns::transport::{DnsTransport, TcpTransport, TransportResponse, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;
use zonehost_application::ports::RecursiveResolver;
use zonehost_domain::DomainError;

/// Forwards queries verbatim to one upstream resolver.
///
/// One UDP attempt; if that reply is truncated, exactly one TCP attempt.
pub struct UpstreamRecursor {
    upstream: SocketAddr,
    timeout: Duration,
    udp: UdpTransport,
    tcp: TcpTransport,
}

impl UpstreamRecursor {
    pub fn new(upstream: SocketAddr, timeout: Duration) -> Self {
        Self {
            upstream,
            timeout,
            udp: UdpTransport::new(upstream),
            tcp: TcpTransport::new(upstream),
        }
    }

    /// Checks the reply belongs to the query and returns its header.
    fn check_reply(
        &self,
        response: &TransportResponse,
        query_id: u16,
    ) -> Result<WireHeader, DomainError> {
        let header = WireHeader::parse(&response.bytes).ok_or_else(|| {
            DomainError::InvalidDnsResponse(format!(
                "{} reply from {} shorter than a DNS header",
                response.protocol_used, self.upstream
            ))
        })?;

        if !header.is_response || header.id != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} reply from {} does not answer query {:#06x}",
                response.protocol_used, self.upstream, query_id
            )));
        }

        Ok(header)
    }

    fn parse_reply(&self, response: &TransportResponse) -> Result<(), DomainError> {
        Message::from_vec(&response.bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!(
                "Failed to parse {} reply from {}: {}",
                response.protocol_used, self.upstream, e
            ))
        })?;
        Ok(())
    }
}

#[async_trait]
impl RecursiveResolver for UpstreamRecursor {
    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let query_id = WireHeader::parse(query).map(|header| header.id).ok_or_else(|| {
            DomainError::MalformedMessage("Query shorter than a DNS header".to_string())
        })?;

        let response = self.udp.send(query, self.timeout).await?;
        let header = self.check_reply(&response, query_id)?;
        let (response, header) = if header.truncated {
            debug!(upstream = %self.upstream, "Truncated UDP reply, retrying over TCP");
            let response = self.tcp.send(query, self.timeout).await?;
            let header = self.check_reply(&response, query_id)?;
            (response, header)
        } else {
            (response, header)
        };

        self.parse_reply(&response)?;
        debug!(
            upstream = %self.upstream,
            protocol = response.protocol_used,
            rcode = ?header.rcode,
            "Upstream reply accepted"
        );
        Ok(Vec::from(response.bytes))
    }

    fn upstream(&self) -> String {
        self.upstream.to_string()
    }
}
