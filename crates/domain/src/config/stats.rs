use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    /// Interval of the periodic query statistics log; 0 disables it.
    #[serde(default = "default_report_interval_secs")]
    pub report_interval_secs: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            report_interval_secs: default_report_interval_secs(),
        }
    }
}

fn default_report_interval_secs() -> u64 {
    60
}
