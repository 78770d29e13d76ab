#![allow(unused_imports)]

mod builders;
mod mock_ports;

pub use builders::{query, query_with_questions, ZoneBuilder};
pub use mock_ports::{
    InMemoryZoneProvider, MockRecursiveResolver, RecordingMetricsSink, StaticZoneSource,
};
