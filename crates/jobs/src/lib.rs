pub mod runner;
pub mod stats_report;
pub mod zone_reload;

pub use runner::JobRunner;
pub use stats_report::StatsReportJob;
pub use zone_reload::ZoneReloadJob;
