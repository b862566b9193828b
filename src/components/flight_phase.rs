use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::AircraftState;

/// Display-only classification of the current flight regime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    Ground,
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Approach,
    Landing,
}

impl FlightPhase {
    pub fn name(&self) -> &'static str {
        match self {
            FlightPhase::Ground => "Ground",
            FlightPhase::Takeoff => "Takeoff",
            FlightPhase::Climb => "Climb",
            FlightPhase::Cruise => "Cruise",
            FlightPhase::Descent => "Descent",
            FlightPhase::Approach => "Approach",
            FlightPhase::Landing => "Landing",
        }
    }

    /// Classifies the aircraft from altitude, speed and pitch.
    ///
    /// On the ground at or above stall speed no rule applies and `previous` is
    /// kept. Pitch exactly on a band edge counts as climbing.
    pub fn classify(previous: FlightPhase, aircraft: &AircraftState) -> FlightPhase {
        let altitude = aircraft.altitude;
        let pitch = aircraft.pitch;

        if altitude < 5.0 {
            if aircraft.speed < 10.0 {
                FlightPhase::Ground
            } else if aircraft.speed < aircraft.spec.stall_speed {
                FlightPhase::Takeoff
            } else {
                previous
            }
        } else if altitude < 1000.0 {
            if pitch < -5.0 {
                FlightPhase::Approach
            } else {
                FlightPhase::Climb
            }
        } else if altitude > 10000.0 {
            if pitch.abs() < 3.0 {
                FlightPhase::Cruise
            } else if pitch >= 3.0 {
                FlightPhase::Climb
            } else {
                FlightPhase::Descent
            }
        } else if pitch >= 3.0 {
            FlightPhase::Climb
        } else if pitch < -3.0 {
            FlightPhase::Descent
        } else {
            FlightPhase::Cruise
        }
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
