mod get_query_stats;

pub use get_query_stats::GetQueryStatsUseCase;
