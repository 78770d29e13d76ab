mod query_metrics;
mod recursive_resolver;
mod zone_provider;
mod zone_source;

pub use query_metrics::QueryMetricsSink;
pub use recursive_resolver::RecursiveResolver;
pub use zone_provider::ZoneProvider;
pub use zone_source::ZoneSource;
