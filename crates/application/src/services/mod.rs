mod response_assembler;
mod zone_lookup;

pub use response_assembler::{dedup_records, ResponseAssembler};
pub use zone_lookup::{wildcard_candidates, ZoneAnswer, ZoneLookup, WILDCARD_DEPTH};
