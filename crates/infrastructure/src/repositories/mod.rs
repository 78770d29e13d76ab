mod zone_file;
mod zone_file_source;

pub use zone_file::{ZoneFile, ZoneFileRecord};
pub use zone_file_source::ZoneFileSource;
