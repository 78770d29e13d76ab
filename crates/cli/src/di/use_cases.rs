use super::DnsServices;
use std::sync::Arc;
use zonehost_application::use_cases::{
    GetQueryStatsUseCase, ReloadZonesUseCase, ResolveQueryUseCase,
};

pub struct UseCases {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub reload_zones: Arc<ReloadZonesUseCase>,
    pub get_stats: Arc<GetQueryStatsUseCase>,
}

impl UseCases {
    pub fn new(services: &DnsServices) -> Self {
        let mut resolve_query =
            ResolveQueryUseCase::new(services.zone_store.clone(), services.metrics.clone());
        if let Some(recursor) = &services.recursor {
            resolve_query = resolve_query.with_recursion(recursor.clone());
        }

        Self {
            resolve_query: Arc::new(resolve_query),
            reload_zones: Arc::new(ReloadZonesUseCase::new(
                services.zone_source.clone(),
                services.zone_store.clone(),
            )),
            get_stats: Arc::new(GetQueryStatsUseCase::new(
                services.zone_store.clone(),
                services.metrics.clone(),
            )),
        }
    }
}
