use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub dns_port: u16,

    /// Idle time after which an inbound TCP connection is closed.
    pub tcp_idle_timeout_secs: u64,

    /// Number of SO_REUSEPORT UDP sockets bound to the same address.
    pub udp_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            dns_port: 53,
            tcp_idle_timeout_secs: 10,
            udp_workers: 1,
        }
    }
}

impl ServerConfig {
    pub fn listen_address(&self) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, self.dns_port)
        } else {
            format!("{}:{}", self.bind_address, self.dns_port)
        }
    }
}
