use bevy::prelude::*;
use std::sync::Arc;

use crate::components::{AircraftModel, AircraftSpec, AircraftState, ConfigError};
use crate::resources::SimConfig;
use crate::utils::CatalogError;

/// Every aircraft that can be selected, in menu order.
#[derive(Resource, Debug, Clone)]
pub struct AircraftCatalog {
    specs: Vec<Arc<AircraftSpec>>,
}

impl Default for AircraftCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AircraftCatalog {
    pub fn builtin() -> Self {
        Self {
            specs: AircraftModel::ALL
                .iter()
                .map(|model| Arc::new(model.spec()))
                .collect(),
        }
    }

    /// Built-in catalog merged with the aircraft file named in `config`, if any.
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        let catalog = Self::builtin();
        match &config.aircraft_file {
            Some(path) => {
                let extra = AircraftSpec::load_all(path)?;
                info!("Loaded {} aircraft from {}", extra.len(), path.display());
                Ok(catalog.with_overrides(extra))
            }
            None => Ok(catalog),
        }
    }

    /// Replaces specs with a matching name and appends the rest.
    pub fn with_overrides(mut self, specs: impl IntoIterator<Item = AircraftSpec>) -> Self {
        for spec in specs {
            match self.specs.iter_mut().find(|known| known.name == spec.name) {
                Some(slot) => *slot = Arc::new(spec),
                None => self.specs.push(Arc::new(spec)),
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Result<Arc<AircraftSpec>, CatalogError> {
        self.specs
            .iter()
            .find(|spec| spec.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownAircraft(name.to_string()))
    }

    pub fn get_index(&self, index: usize) -> Option<Arc<AircraftSpec>> {
        self.specs.get(index).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn create_aircraft(
        &self,
        name: &str,
        x: f64,
        y: f64,
        altitude: f64,
    ) -> Result<AircraftState, CatalogError> {
        Ok(AircraftState::new(self.get(name)?, x, y, altitude))
    }
}
