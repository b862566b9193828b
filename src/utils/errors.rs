use thiserror::Error;

use crate::components::aircraft::ConfigError;

/// Failed lookups against the static aircraft and airport tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown aircraft model: {0}")]
    UnknownAircraft(String),

    #[error("Unknown airport: {0}")]
    UnknownAirport(String),

    #[error("Catalog is empty: {0}")]
    Empty(&'static str),
}

/// Anything that stops the simulator from starting.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
