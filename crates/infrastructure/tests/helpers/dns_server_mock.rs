#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const UDP_ANSWER: [u8; 4] = [192, 0, 2, 1];
pub const TCP_ANSWER: [u8; 4] = [192, 0, 2, 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UdpBehavior {
    Answer,
    /// Empty reply with the TC bit set.
    Truncate,
    /// Reply carrying a different message ID.
    WrongId,
    Silent,
    /// Truncated UDP reply with nothing listening on the TCP port.
    TruncateWithoutTcp,
}

/// Upstream resolver listening on the same port for UDP and TCP.
///
/// Answers every question with one A record: `UDP_ANSWER` over UDP,
/// `TCP_ANSWER` over TCP.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: UdpBehavior) -> Result<Self, std::io::Error> {
        if behavior == UdpBehavior::TruncateWithoutTcp {
            let udp = UdpSocket::bind("127.0.0.1:0").await?;
            return Ok(Self::spawn(udp, None, behavior));
        }

        let mut last_err = None;
        for _ in 0..10 {
            let udp = UdpSocket::bind("127.0.0.1:0").await?;
            let addr = udp.local_addr()?;
            match TcpListener::bind(addr).await {
                Ok(tcp) => return Ok(Self::spawn(udp, Some(tcp), behavior)),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap())
    }

    fn spawn(udp: UdpSocket, tcp: Option<TcpListener>, behavior: UdpBehavior) -> Self {
        let addr = udp.local_addr().unwrap();
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = udp.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            let query = &buf[..len];
                            let response = match behavior {
                                UdpBehavior::Answer => build_response(query, UDP_ANSWER, false),
                                UdpBehavior::Truncate | UdpBehavior::TruncateWithoutTcp => {
                                    build_response(query, UDP_ANSWER, true)
                                }
                                UdpBehavior::WrongId => {
                                    let mut response = build_response(query, UDP_ANSWER, false);
                                    response[0] ^= 0xff;
                                    response
                                }
                                UdpBehavior::Silent => continue,
                            };
                            let _ = udp.send_to(&response, peer).await;
                        }
                    }
                    result = accept(tcp.as_ref()) => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = build_response(&query, TCP_ANSWER, false);
                                let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn accept(
    listener: Option<&TcpListener>,
) -> std::io::Result<(tokio::net::TcpStream, SocketAddr)> {
    match listener {
        Some(listener) => listener.accept().await,
        None => std::future::pending().await,
    }
}

/// Reply echoing the query's ID and question. Truncated replies carry no answer.
fn build_response(query: &[u8], ip: [u8; 4], truncated: bool) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);

    response.push(if truncated { 0x83 } else { 0x81 });
    response.push(0x80);

    response.extend_from_slice(&query[4..6]);

    let answers: u8 = if truncated { 0 } else { 1 };
    response.extend_from_slice(&[0x00, answers]);

    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..]);

    if !truncated {
        response.extend_from_slice(&[
            0xc0, 0x0c, // pointer to the question name
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c,
            0x00, 0x04,
        ]);
        response.extend_from_slice(&ip);
    }

    response
}
