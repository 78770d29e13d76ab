pub mod dns;
pub mod queries;
pub mod zones;

pub use dns::{QueryOutcome, ResolveQueryUseCase};
pub use queries::GetQueryStatsUseCase;
pub use zones::ReloadZonesUseCase;
