use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wraps an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Compass bearing in degrees from `from` to `to` on the world plane.
///
/// The world plane has y growing towards the south, so north is `-y`.
pub fn bearing_between(from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> f64 {
    let dx = to_x - from_x;
    let dy = to_y - from_y;
    wrap_degrees(rad_to_deg(dx.atan2(-dy)))
}

/// Unit direction on the world plane for a compass heading.
///
/// Heading 0 points "up" the screen, 90 points right.
pub fn heading_vector(heading: f64) -> (f64, f64) {
    let angle = deg_to_rad(heading - 90.0);
    (angle.cos(), angle.sin())
}
