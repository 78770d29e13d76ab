pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use zonehost_domain::DomainError;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
