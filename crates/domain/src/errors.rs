use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Failed to load zone file {file}: {reason}")]
    ZoneLoad { file: String, reason: String },

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport error with {server}: {reason}")]
    TransportIo { server: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
