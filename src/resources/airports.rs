use bevy::prelude::*;
use nalgebra::Vector2;
use std::collections::HashMap;
use std::sync::Arc;

use crate::components::Airport;
use crate::utils::{CatalogError, ROUTE_CRUISE_SPEED_KT};

/// Known airports, in menu order.
#[derive(Resource, Debug, Clone)]
pub struct AirportCatalog {
    airports: Vec<Arc<Airport>>,
}

impl Default for AirportCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AirportCatalog {
    pub fn builtin() -> Self {
        Self::new(vec![
            Airport::jfk(),
            Airport::lax(),
            Airport::lhr(),
            Airport::cdg(),
            Airport::nrt(),
        ])
    }

    pub fn new(airports: Vec<Airport>) -> Self {
        Self {
            airports: airports.into_iter().map(Arc::new).collect(),
        }
    }

    /// Lookup by IATA code, ignoring case.
    pub fn get(&self, code: &str) -> Result<Arc<Airport>, CatalogError> {
        self.airports
            .iter()
            .find(|airport| airport.code.eq_ignore_ascii_case(code))
            .cloned()
            .ok_or_else(|| CatalogError::UnknownAirport(code.to_string()))
    }

    pub fn get_index(&self, index: usize) -> Option<Arc<Airport>> {
        self.airports.get(index).cloned()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.airports.iter().map(|airport| airport.code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Airport>> {
        self.airports.iter()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Straight-line route between two airports.
#[derive(Debug, Clone)]
pub struct FlightRoute {
    pub departure: Arc<Airport>,
    pub arrival: Arc<Airport>,
    /// [nm]
    pub distance: f64,
    /// Block time at the planning cruise speed [h]
    pub duration: f64,
    pub waypoints: Vec<Vector2<f64>>,
}

impl FlightRoute {
    pub fn new(departure: Arc<Airport>, arrival: Arc<Airport>) -> Self {
        let distance = departure.distance_to(&arrival);
        let waypoints = vec![departure.position, arrival.position];
        Self {
            departure,
            arrival,
            distance,
            duration: distance / ROUTE_CRUISE_SPEED_KT,
            waypoints,
        }
    }

    /// e.g. "3041 nm, 6.8h"
    pub fn summary(&self) -> String {
        format!("{:.0} nm, {:.1}h", self.distance, self.duration)
    }
}

/// Routes between every ordered pair of distinct airports.
#[derive(Resource, Debug, Clone)]
pub struct RouteManager {
    routes: HashMap<(String, String), FlightRoute>,
    order: Vec<String>,
}

impl RouteManager {
    pub fn new(catalog: &AirportCatalog) -> Self {
        let mut routes = HashMap::new();
        for departure in catalog.iter() {
            for arrival in catalog.iter() {
                if departure.code == arrival.code {
                    continue;
                }
                routes.insert(
                    (departure.code.clone(), arrival.code.clone()),
                    FlightRoute::new(departure.clone(), arrival.clone()),
                );
            }
        }

        Self {
            routes,
            order: catalog.codes().map(str::to_string).collect(),
        }
    }

    pub fn get_route(&self, departure: &str, arrival: &str) -> Option<&FlightRoute> {
        self.routes
            .get(&(departure.to_ascii_uppercase(), arrival.to_ascii_uppercase()))
    }

    /// Every airport reachable from `departure`, in catalog order.
    pub fn get_all_destinations(&self, departure: &str) -> Vec<&str> {
        let departure = departure.to_ascii_uppercase();
        self.order
            .iter()
            .filter(|code| self.routes.contains_key(&(departure.clone(), code.to_string())))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = AirportCatalog::builtin();
        assert_eq!(catalog.get("lhr").unwrap().city, "London");
        assert_eq!(catalog.get("Nrt").unwrap().code, "NRT");
        assert_eq!(
            catalog.get("SFO").unwrap_err(),
            CatalogError::UnknownAirport("SFO".to_string())
        );
        assert_eq!(
            catalog.codes().collect::<Vec<_>>(),
            vec!["JFK", "LAX", "LHR", "CDG", "NRT"]
        );
    }

    #[test]
    fn test_routes_cover_all_ordered_pairs() {
        let manager = RouteManager::new(&AirportCatalog::builtin());
        assert_eq!(manager.len(), 20);
        assert!(manager.get_route("JFK", "JFK").is_none());

        let route = manager.get_route("JFK", "LAX").unwrap();
        let back = manager.get_route("lax", "jfk").unwrap();
        assert_relative_eq!(route.distance, back.distance);
        assert_relative_eq!(route.distance, (3000.0f64.powi(2) + 800.0f64.powi(2)).sqrt() * 0.01);
        assert_relative_eq!(route.duration, route.distance / 450.0);
        assert_eq!(route.waypoints, vec![Vector2::new(0.0, 0.0), Vector2::new(-3000.0, 800.0)]);
    }

    #[test]
    fn test_destinations() {
        let manager = RouteManager::new(&AirportCatalog::builtin());
        assert_eq!(manager.get_all_destinations("JFK"), vec!["LAX", "LHR", "CDG", "NRT"]);
        assert_eq!(manager.get_all_destinations("CDG"), vec!["JFK", "LAX", "LHR", "NRT"]);
        assert!(manager.get_all_destinations("SFO").is_empty());
    }

    #[test]
    fn test_route_summary() {
        let manager = RouteManager::new(&AirportCatalog::builtin());
        let route = manager.get_route("LHR", "CDG").unwrap();
        // sqrt(200² + 700²) · 0.01 ≈ 7.28 nm
        assert_eq!(route.summary(), "7 nm, 0.0h");
    }
}
