//! TCP transport to the upstream resolver (RFC 1035 §4.2.2).
//!
//! Every message is preceded by its length as a big-endian u16. One
//! connection per exchange.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;
use zonehost_domain::DomainError;

pub const MAX_TCP_MESSAGE_SIZE: usize = 65535;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    fn with_server(&self, e: DomainError) -> DomainError {
        match e {
            DomainError::TransportIo { reason, .. } => DomainError::TransportIo {
                server: self.server_addr.to_string(),
                reason,
            },
            other => other,
        }
    }

    async fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect(self.server_addr))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::ConnectionRefused {
                    DomainError::TransportConnectionRefused {
                        server: self.server_addr.to_string(),
                    }
                } else {
                    DomainError::TransportIo {
                        server: self.server_addr.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::TransportIo {
                server: self.server_addr.to_string(),
                reason: format!("Failed to set TCP_NODELAY: {}", e),
            })?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let mut stream = self.connect(timeout).await?;

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.with_server(e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.with_server(e))?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: Bytes::from(response_bytes),
            protocol_used: self.protocol_name(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

/// Writes one length-prefixed DNS message.
pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| DomainError::TransportIo {
        server: String::new(),
        reason: format!(
            "Message too large: {} bytes (max {})",
            message_bytes.len(),
            MAX_TCP_MESSAGE_SIZE
        ),
    })?;

    let io = |e: std::io::Error| DomainError::TransportIo {
        server: String::new(),
        reason: e.to_string(),
    };

    stream.write_all(&length.to_be_bytes()).await.map_err(io)?;
    stream.write_all(message_bytes).await.map_err(io)?;
    stream.flush().await.map_err(io)?;

    Ok(())
}

/// Reads one length-prefixed DNS message.
pub async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let io = |e: std::io::Error| DomainError::TransportIo {
        server: String::new(),
        reason: e.to_string(),
    };

    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await.map_err(io)?;

    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await.map_err(io)?;

    Ok(message)
}
