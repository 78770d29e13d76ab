pub mod errors;
pub mod logging;
pub mod recursion;
pub mod root;
pub mod server;
pub mod stats;
pub mod zones;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use recursion::RecursionConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use stats::StatsConfig;
pub use zones::ZonesConfig;
