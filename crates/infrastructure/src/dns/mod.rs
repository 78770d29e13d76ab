pub mod codec;
pub mod metrics;
pub mod recursor;
pub mod server;
pub mod transport;
pub mod zone_store;

pub use metrics::InMemoryQueryMetrics;
pub use recursor::UpstreamRecursor;
pub use server::DnsRequestHandler;
pub use zone_store::ZoneStore;
