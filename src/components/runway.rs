use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A single runway, positioned relative to its airport's reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    /// Designator, e.g. "04L/22R"
    pub number: String,
    /// [ft]
    pub length: f64,
    /// [ft]
    pub width: f64,
    /// Magnetic heading of the first designator [deg]
    pub heading: f64,
    /// Offset from the airport reference point [world units]
    pub offset: Vector2<f64>,
}

impl Runway {
    pub fn new(
        number: impl Into<String>,
        length: f64,
        width: f64,
        heading: f64,
        x_offset: f64,
        y_offset: f64,
    ) -> Self {
        Self {
            number: number.into(),
            length,
            width,
            heading,
            offset: Vector2::new(x_offset, y_offset),
        }
    }

    /// Drawn size on the world plane, with a floor so short strips stay visible.
    pub fn display_size(&self) -> (f64, f64) {
        ((self.length * 0.01).max(20.0), (self.width * 0.01).max(3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_size_floors() {
        let runway = Runway::new("09/27", 12000.0, 150.0, 90.0, 0.0, 0.0);
        assert_eq!(runway.display_size(), (120.0, 3.0));

        let strip = Runway::new("18/36", 1500.0, 400.0, 180.0, 0.0, 0.0);
        assert_eq!(strip.display_size(), (20.0, 4.0));
    }
}
