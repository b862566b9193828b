mod catalog;

pub use catalog::AircraftCatalog;
