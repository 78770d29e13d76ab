use crate::ports::{QueryMetricsSink, ZoneProvider};
use std::sync::Arc;
use zonehost_domain::QueryStats;

pub struct GetQueryStatsUseCase {
    zones: Arc<dyn ZoneProvider>,
    metrics: Arc<dyn QueryMetricsSink>,
}

impl GetQueryStatsUseCase {
    pub fn new(zones: Arc<dyn ZoneProvider>, metrics: Arc<dyn QueryMetricsSink>) -> Self {
        Self { zones, metrics }
    }

    pub fn execute(&self) -> QueryStats {
        let outcomes = self.metrics.outcomes();
        let total_queries = outcomes.iter().map(|(_, _, count)| count).sum();

        QueryStats {
            total_queries,
            zone_hits: self.zones.hits(),
            outcomes,
        }
    }
}
