use crate::ports::{ZoneProvider, ZoneSource};
use std::sync::Arc;
use tracing::{debug, info};
use zonehost_domain::DomainError;

pub struct ReloadZonesUseCase {
    source: Arc<dyn ZoneSource>,
    zones: Arc<dyn ZoneProvider>,
}

impl ReloadZonesUseCase {
    pub fn new(source: Arc<dyn ZoneSource>, zones: Arc<dyn ZoneProvider>) -> Self {
        Self { source, zones }
    }

    /// Loads every zone and swaps the whole set in at once. On error the live
    /// set is left untouched. Returns the number of zones now served.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let loaded = self.source.load_zones().await?;
        let zone_count = loaded.len();
        let mut cuts: Vec<&str> = loaded.cuts().collect();
        cuts.sort_unstable();
        debug!(zones = ?cuts, "Zones loaded");

        self.zones.replace(loaded);
        info!(zones = zone_count, "Zone set replaced");

        Ok(zone_count)
    }
}
