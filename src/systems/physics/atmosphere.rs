/// Altitude of the troposphere/stratosphere split [ft]
const TROPOPAUSE_ALTITUDE: f64 = 36000.0;

/// Air density at `altitude` [ft] for a given sea level density.
///
/// Power-law lapse below the tropopause, constant fraction above it. The lapse
/// formula is fed the altitude in feet.
pub fn air_density(altitude: f64, sea_level_density: f64) -> f64 {
    if altitude < TROPOPAUSE_ALTITUDE {
        let temperature_ratio = 1.0 - 0.0065 * altitude / 288.15;
        sea_level_density * temperature_ratio.powf(4.256)
    } else {
        sea_level_density * 0.297
    }
}
