use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use zonehost_domain::config::ServerConfig;
use zonehost_infrastructure::dns::transport::tcp::{
    read_with_length_prefix, send_with_length_prefix,
};
use zonehost_infrastructure::dns::DnsRequestHandler;

const UDP_RECV_BUFFER: usize = 4096;

pub async fn start_dns_server(
    bind_addr: String,
    handler: Arc<DnsRequestHandler>,
    server: &ServerConfig,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let num_workers = server.udp_workers;
    let idle_timeout = Duration::from_secs(server.tcp_idle_timeout_secs);

    info!(bind_address = %socket_addr, num_workers, "Starting DNS server with SO_REUSEPORT");

    let mut join_set: JoinSet<()> = JoinSet::new();

    for i in 0..num_workers {
        let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
        let handler_udp = handler.clone();
        let shutdown_udp = shutdown.clone();
        join_set.spawn(async move {
            run_udp_worker(udp_socket, handler_udp, i, shutdown_udp).await;
        });
    }

    let tcp_listener = create_tcp_listener(domain, socket_addr)?;
    let shutdown_tcp = shutdown.clone();
    join_set.spawn(async move {
        run_tcp_listener(tcp_listener, handler, idle_timeout, shutdown_tcp).await;
    });

    info!("DNS server ready: {} UDP workers and TCP on {}", num_workers, socket_addr);

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_worker(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsRequestHandler>,
    worker_id: usize,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; UDP_RECV_BUFFER];

    loop {
        let (n, from) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!(worker = worker_id, "UDP worker shutting down");
                break;
            }
            result = socket.recv_from(&mut recv_buf) => match result {
                Ok(received) => received,
                Err(e) => {
                    error!(worker = worker_id, error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        let handler = handler.clone();
        let socket = socket.clone();
        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_udp(&query, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "UDP send failed");
                }
            }
        });
    }
}

async fn run_tcp_listener(
    listener: TcpListener,
    handler: Arc<DnsRequestHandler>,
    idle_timeout: Duration,
    shutdown: CancellationToken,
) {
    loop {
        let (stream, peer) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!("TCP listener shutting down");
                break;
            }
            result = listener.accept() => match result {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "TCP accept error");
                    continue;
                }
            },
        };

        let handler = handler.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            serve_tcp_connection(stream, peer, handler, idle_timeout, shutdown).await;
        });
    }
}

/// Answers length-prefixed queries in order until the client goes quiet,
/// closes the connection, or the server shuts down.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<DnsRequestHandler>,
    idle_timeout: Duration,
    shutdown: CancellationToken,
) {
    loop {
        let read = tokio::select! {
            _ = shutdown.cancelled() => break,
            read = tokio::time::timeout(idle_timeout, read_with_length_prefix(&mut stream)) => read,
        };

        let query = match read {
            Ok(Ok(query)) => query,
            Ok(Err(e)) => {
                debug!(client = %peer, error = %e, "TCP connection closed");
                break;
            }
            Err(_) => {
                debug!(client = %peer, "TCP connection idle, closing");
                break;
            }
        };

        let Some(response) = handler.handle(&query, peer).await else {
            continue;
        };
        if let Err(e) = send_with_length_prefix(&mut stream, &response).await {
            debug!(client = %peer, error = %e, "TCP send failed");
            break;
        }
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
