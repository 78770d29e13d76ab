use anyhow::anyhow;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use zonehost_domain::Config;
use zonehost_infrastructure::dns::{InMemoryQueryMetrics, UpstreamRecursor, ZoneStore};
use zonehost_infrastructure::repositories::ZoneFileSource;

pub struct DnsServices {
    pub zone_store: Arc<ZoneStore>,
    pub zone_source: Arc<ZoneFileSource>,
    pub metrics: Arc<InMemoryQueryMetrics>,
    pub recursor: Option<Arc<UpstreamRecursor>>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let recursor = match config.recursion.upstream_addr() {
            Some(Ok(upstream)) => {
                info!(
                    upstream = %upstream,
                    timeout_ms = config.recursion.timeout_ms,
                    "Recursion enabled"
                );
                Some(Arc::new(UpstreamRecursor::new(
                    upstream,
                    Duration::from_millis(config.recursion.timeout_ms),
                )))
            }
            Some(Err(e)) => return Err(anyhow!(e)),
            None => {
                info!("Recursion disabled");
                None
            }
        };

        let zone_source = Arc::new(ZoneFileSource::new(config.zones.files.iter()));
        info!(files = zone_source.files().len(), "Zone files configured");

        Ok(Self {
            zone_store: Arc::new(ZoneStore::empty()),
            zone_source,
            metrics: Arc::new(InMemoryQueryMetrics::new()),
            recursor,
        })
    }
}
