use zonehost_domain::ResponseCode;

pub trait QueryMetricsSink: Send + Sync {
    /// Called once per completed query. `zone` is empty when no zone matched.
    fn record_query(&self, zone: &str, rcode: ResponseCode);

    /// Counters per (zone, rcode), sorted by zone then rcode value.
    fn outcomes(&self) -> Vec<(String, ResponseCode, u64)>;
}
