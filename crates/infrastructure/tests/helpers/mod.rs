#![allow(unused_imports)]

mod builders;
mod dns_server_mock;

pub use builders::{query_bytes, query_bytes_with, write_zone_file, EXAMPLE_ZONE};
pub use dns_server_mock::{MockDnsServer, UdpBehavior};
