use async_trait::async_trait;
use zonehost_domain::{DomainError, ZoneCollection};

/// Where zone data comes from (zone files on disk in production).
#[async_trait]
pub trait ZoneSource: Send + Sync {
    async fn load_zones(&self) -> Result<ZoneCollection, DomainError>;
}
