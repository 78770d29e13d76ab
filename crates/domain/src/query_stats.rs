use crate::dns_message::ResponseCode;

/// Point-in-time view of the query counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryStats {
    pub total_queries: u64,

    /// Resolutions per zone cut; sorted by cut name.
    pub zone_hits: Vec<(String, u64)>,

    /// Completed queries per (zone cut, rcode). An empty cut means no zone matched.
    pub outcomes: Vec<(String, ResponseCode, u64)>,
}

impl QueryStats {
    pub fn count_for(&self, zone: &str, rcode: ResponseCode) -> u64 {
        self.outcomes
            .iter()
            .find(|(z, r, _)| z == zone && *r == rcode)
            .map(|(_, _, count)| *count)
            .unwrap_or(0)
    }

    pub fn hits_for(&self, zone: &str) -> u64 {
        self.zone_hits
            .iter()
            .find(|(z, _)| z == zone)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
