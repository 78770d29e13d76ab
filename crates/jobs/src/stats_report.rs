use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::info;
use zonehost_application::use_cases::GetQueryStatsUseCase;

/// Logs the query counters at a fixed interval.
pub struct StatsReportJob {
    stats: Arc<GetQueryStatsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StatsReportJob {
    pub fn new(stats: Arc<GetQueryStatsUseCase>, interval_secs: u64) -> Self {
        Self {
            stats,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting stats report job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("StatsReportJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => self.report(),
                }
            }
        });
    }

    fn report(&self) {
        let stats = self.stats.execute();
        info!(total_queries = stats.total_queries, "Query statistics");

        for (zone, hits) in &stats.zone_hits {
            info!(zone = %zone, hits, "Zone hits");
        }
        for (zone, rcode, count) in &stats.outcomes {
            let zone = if zone.is_empty() { "-" } else { zone.as_str() };
            info!(zone = %zone, rcode = %rcode, count, "Query outcomes");
        }
    }
}
