#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::io::Write;
use std::path::Path;

pub const EXAMPLE_ZONE: &str = r#"
origin = "example.com."
ttl = 300

[[records]]
name = "@"
type = "SOA"
value = "ns1 hostmaster 2024010101 7200 3600 1209600 300"

[[records]]
name = "@"
type = "NS"
value = "ns1"

[[records]]
name = "ns1"
type = "A"
value = "192.0.2.53"

[[records]]
name = "www"
type = "A"
value = "192.0.2.10"

[[records]]
name = "alias"
type = "CNAME"
value = "www"

[[records]]
name = "*.wild"
type = "A"
value = "192.0.2.99"
"#;

pub fn query_bytes(name: &str, record_type: RecordType) -> Vec<u8> {
    query_bytes_with(0x5150, &[(name, record_type)])
}

pub fn query_bytes_with(id: u16, questions: &[(&str, RecordType)]) -> Vec<u8> {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    for (name, record_type) in questions {
        let mut query = Query::new();
        query.set_name(Name::from_ascii(name).unwrap());
        query.set_query_type(*record_type);
        query.set_query_class(DNSClass::IN);
        message.add_query(query);
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

pub fn write_zone_file(dir: &Path, file_name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(file_name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}
