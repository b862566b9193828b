use bevy::prelude::*;
use std::sync::Arc;

use crate::components::{Airport, AircraftState};
use crate::resources::{AircraftCatalog, AirportCatalog, FlightRoute, RouteManager};
use crate::utils::CatalogError;

/// Cursor positions of the selection menus.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuSelection {
    pub aircraft: usize,
    pub departure: usize,
    pub destination: usize,
}

/// Moves `index` by `step` within `0..len`, wrapping at both ends.
pub fn wrap_index(index: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + step).rem_euclid(len as isize) as usize
}

impl MenuSelection {
    pub fn cycle_aircraft(&mut self, step: isize, count: usize) {
        self.aircraft = wrap_index(self.aircraft, step, count);
    }

    pub fn cycle_departure(&mut self, step: isize, count: usize) {
        self.departure = wrap_index(self.departure, step, count);
    }

    pub fn cycle_destination(&mut self, step: isize, count: usize) {
        self.destination = wrap_index(self.destination, step, count);
    }
}

/// Airports and route of the flight in progress.
#[derive(Resource, Debug, Clone)]
pub struct ActiveFlight {
    pub departure: Arc<Airport>,
    pub destination: Arc<Airport>,
    pub route: Option<FlightRoute>,
}

/// Builds the aircraft and flight plan for the current menu selection.
///
/// A destination equal to the departure is moved to the next airport. The
/// aircraft starts lined up on the departure's longest runway.
pub fn prepare_flight(
    selection: &MenuSelection,
    aircraft: &AircraftCatalog,
    airports: &AirportCatalog,
    routes: &RouteManager,
) -> Result<(AircraftState, ActiveFlight), CatalogError> {
    let spec = aircraft
        .get_index(selection.aircraft)
        .ok_or(CatalogError::Empty("aircraft"))?;

    let departure = airports
        .get_index(selection.departure)
        .ok_or(CatalogError::Empty("airports"))?;
    let mut destination_index = selection.destination;
    if destination_index == selection.departure {
        destination_index = wrap_index(destination_index, 1, airports.len());
    }
    let destination = airports
        .get_index(destination_index)
        .ok_or(CatalogError::Empty("airports"))?;

    let runway = departure
        .primary_runway()
        .ok_or_else(|| CatalogError::UnknownAirport(format!("{} has no runways", departure.code)))?;
    let start = departure.runway_start_position(runway);

    let mut state = AircraftState::new(spec, start.x, start.y, departure.elevation);
    state.heading = runway.heading;

    let route = routes.get_route(&departure.code, &destination.code).cloned();
    Ok((
        state,
        ActiveFlight {
            departure,
            destination,
            route,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use pretty_assertions::assert_eq;

    fn catalogs() -> (AircraftCatalog, AirportCatalog, RouteManager) {
        let airports = AirportCatalog::builtin();
        let routes = RouteManager::new(&airports);
        (AircraftCatalog::builtin(), airports, routes)
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, -1, 5), 4);
        assert_eq!(wrap_index(4, 1, 5), 0);
        assert_eq!(wrap_index(2, 1, 5), 3);
        assert_eq!(wrap_index(3, 1, 0), 0);
    }

    #[test]
    fn test_prepare_flight_at_primary_runway() {
        let (aircraft, airports, routes) = catalogs();
        let selection = MenuSelection {
            aircraft: 3,
            departure: 1,
            destination: 2,
        };

        let (state, flight) = prepare_flight(&selection, &aircraft, &airports, &routes).unwrap();
        assert_eq!(state.spec.name, "Cessna 172");
        assert_eq!(state.position, Vector2::new(-3000.0, 710.0));
        assert_eq!(state.heading, 70.0);
        assert_eq!(state.altitude, 125.0);
        assert_eq!(state.speed, 0.0);
        assert_eq!(flight.departure.code, "LAX");
        assert_eq!(flight.destination.code, "LHR");
        assert!(flight.route.is_some());
    }

    #[test]
    fn test_same_airport_bumps_destination() {
        let (aircraft, airports, routes) = catalogs();
        let selection = MenuSelection {
            aircraft: 0,
            departure: 4,
            destination: 4,
        };

        let (_, flight) = prepare_flight(&selection, &aircraft, &airports, &routes).unwrap();
        assert_eq!(flight.departure.code, "NRT");
        assert_eq!(flight.destination.code, "JFK");
    }

    #[test]
    fn test_out_of_range_selection() {
        let (aircraft, airports, routes) = catalogs();
        let selection = MenuSelection {
            aircraft: 42,
            ..Default::default()
        };
        assert_eq!(
            prepare_flight(&selection, &aircraft, &airports, &routes).unwrap_err(),
            CatalogError::Empty("aircraft")
        );
    }
}
