use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ZonesConfig {
    /// Zone files to load, in order. A later file replaces an earlier one with the same origin.
    pub files: Vec<String>,

    /// Periodic reload interval; 0 disables reloading.
    pub reload_interval_secs: u64,
}
