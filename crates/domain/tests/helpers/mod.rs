mod builders;

pub use builders::ZoneBuilder;
