use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecursionConfig {
    /// Upstream resolver queries are forwarded to. `None` or empty disables recursion.
    pub upstream: Option<String>,

    /// Per-attempt timeout for the upstream exchange.
    pub timeout_ms: u64,
}

impl Default for RecursionConfig {
    fn default() -> Self {
        Self {
            upstream: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RecursionConfig {
    pub fn is_enabled(&self) -> bool {
        self.upstream
            .as_deref()
            .is_some_and(|upstream| !upstream.trim().is_empty())
    }

    /// Parsed upstream address. A bare IP gets port 53.
    pub fn upstream_addr(&self) -> Option<Result<SocketAddr, String>> {
        if !self.is_enabled() {
            return None;
        }
        let upstream = self.upstream.as_deref()?.trim();
        Some(parse_upstream(upstream))
    }
}

fn parse_upstream(upstream: &str) -> Result<SocketAddr, String> {
    if let Ok(addr) = upstream.parse::<SocketAddr>() {
        return Ok(addr);
    }
    upstream
        .parse::<std::net::IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|e| format!("Invalid upstream address '{}': {}", upstream, e))
}

fn default_timeout_ms() -> u64 {
    2000
}
