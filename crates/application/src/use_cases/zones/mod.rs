mod reload_zones;

pub use reload_zones::ReloadZonesUseCase;
