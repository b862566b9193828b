/// Sea level air density [slug/ft³]
pub const SEA_LEVEL_AIR_DENSITY: f64 = 0.002_378;

/// Speed of sound used for the Mach approximation [kt]
pub const SPEED_OF_SOUND_KT: f64 = 661.5;

/// World units travelled per second for each knot of airspeed
pub const KNOTS_TO_WORLD_UNITS: f64 = 0.1;

/// Nautical miles per world unit
pub const WORLD_UNITS_TO_NM: f64 = 0.01;

/// Cruise speed assumed when estimating route duration [kt]
pub const ROUTE_CRUISE_SPEED_KT: f64 = 450.0;
