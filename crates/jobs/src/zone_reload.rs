use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonehost_application::use_cases::ReloadZonesUseCase;

/// Periodically reloads every zone file and swaps the new set in.
///
/// The first reload happens one interval after start; the initial load is the
/// caller's job. A failed reload keeps the zones currently served.
pub struct ZoneReloadJob {
    reload: Arc<ReloadZonesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ZoneReloadJob {
    pub fn new(reload: Arc<ReloadZonesUseCase>, interval_secs: u64) -> Self {
        Self {
            reload,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting zone reload job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ZoneReloadJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.reload.execute().await {
                            Ok(zones) => {
                                info!(zones, "Periodic zone reload completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Zone reload failed, keeping current zones");
                            }
                        }
                    }
                }
            }
        });
    }
}
