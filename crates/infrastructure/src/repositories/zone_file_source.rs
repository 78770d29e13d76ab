use super::ZoneFile;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use zonehost_application::ports::ZoneSource;
use zonehost_domain::{DomainError, Zone, ZoneCollection};

/// Zone files on disk, one zone per file.
pub struct ZoneFileSource {
    files: Vec<PathBuf>,
}

impl ZoneFileSource {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub async fn load_file(path: &Path) -> Result<Zone, DomainError> {
        let file = path.display().to_string();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::ZoneLoad {
                file: file.clone(),
                reason: e.to_string(),
            })?;

        let zone = ZoneFile::parse(&contents, &file)?.into_zone(&file)?;

        if zone.soa().is_empty() {
            warn!(file = %file, zone = %zone.origin(), "Zone has no SOA record at its origin");
        }

        Ok(zone)
    }
}

#[async_trait]
impl ZoneSource for ZoneFileSource {
    async fn load_zones(&self) -> Result<ZoneCollection, DomainError> {
        let mut zones = ZoneCollection::new();

        for path in &self.files {
            let zone = Self::load_file(path).await?;
            let origin = zone.origin().to_string();
            let records = zone.len();

            if zones.insert(zone).is_some() {
                warn!(
                    file = %path.display(),
                    zone = %origin,
                    "Zone loaded again; the later file replaces the earlier one"
                );
            }
            info!(file = %path.display(), zone = %origin, records, "Zone loaded");
        }

        Ok(zones)
    }
}
