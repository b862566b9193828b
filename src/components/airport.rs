use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::Runway;
use crate::utils::{bearing_between, WORLD_UNITS_TO_NM};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// Reference point on the world plane
    pub position: Vector2<f64>,
    /// [ft]
    pub elevation: f64,
    pub runways: Vec<Runway>,
    pub color: [u8; 3],
}

impl Airport {
    /// Longest runway. The first one listed wins a tie.
    pub fn primary_runway(&self) -> Option<&Runway> {
        self.runways
            .iter()
            .reduce(|best, runway| if runway.length > best.length { runway } else { best })
    }

    pub fn runway_start_position(&self, runway: &Runway) -> Vector2<f64> {
        self.position + runway.offset
    }

    /// Straight-line distance [nm]
    pub fn distance_to(&self, other: &Airport) -> f64 {
        (other.position - self.position).norm() * WORLD_UNITS_TO_NM
    }

    /// Initial bearing towards `other` [deg, 0..360)
    pub fn bearing_to(&self, other: &Airport) -> f64 {
        bearing_between(
            self.position.x,
            self.position.y,
            other.position.x,
            other.position.y,
        )
    }

    pub fn jfk() -> Self {
        Self {
            code: "JFK".into(),
            name: "John F. Kennedy International Airport".into(),
            city: "New York".into(),
            country: "United States".into(),
            position: Vector2::new(0.0, 0.0),
            elevation: 13.0,
            runways: vec![
                Runway::new("04L/22R", 12079.0, 200.0, 40.0, -100.0, 0.0),
                Runway::new("04R/22L", 11351.0, 200.0, 40.0, 100.0, 0.0),
                Runway::new("08L/26R", 10000.0, 150.0, 80.0, 0.0, -100.0),
                Runway::new("08R/26L", 8400.0, 150.0, 80.0, 0.0, 100.0),
            ],
            color: [0, 150, 255],
        }
    }

    pub fn lax() -> Self {
        Self {
            code: "LAX".into(),
            name: "Los Angeles International Airport".into(),
            city: "Los Angeles".into(),
            country: "United States".into(),
            position: Vector2::new(-3000.0, 800.0),
            elevation: 125.0,
            runways: vec![
                Runway::new("06L/24R", 10885.0, 200.0, 60.0, -80.0, 0.0),
                Runway::new("06R/24L", 8926.0, 200.0, 60.0, 80.0, 0.0),
                Runway::new("07L/25R", 12091.0, 200.0, 70.0, 0.0, -90.0),
                Runway::new("07R/25L", 11095.0, 200.0, 70.0, 0.0, 90.0),
            ],
            color: [255, 200, 0],
        }
    }

    pub fn lhr() -> Self {
        Self {
            code: "LHR".into(),
            name: "London Heathrow Airport".into(),
            city: "London".into(),
            country: "United Kingdom".into(),
            position: Vector2::new(4000.0, -500.0),
            elevation: 83.0,
            runways: vec![
                Runway::new("09L/27R", 12799.0, 164.0, 90.0, -100.0, 0.0),
                Runway::new("09R/27L", 12008.0, 164.0, 90.0, 100.0, 0.0),
            ],
            color: [0, 255, 100],
        }
    }

    pub fn cdg() -> Self {
        Self {
            code: "CDG".into(),
            name: "Charles de Gaulle Airport".into(),
            city: "Paris".into(),
            country: "France".into(),
            position: Vector2::new(4200.0, 200.0),
            elevation: 392.0,
            runways: vec![
                Runway::new("08L/26R", 13123.0, 197.0, 80.0, -120.0, 0.0),
                Runway::new("08R/26L", 13780.0, 197.0, 80.0, 120.0, 0.0),
                Runway::new("09/27", 8858.0, 197.0, 90.0, 0.0, -150.0),
                Runway::new("10/28", 9843.0, 197.0, 100.0, 0.0, 150.0),
            ],
            color: [255, 100, 255],
        }
    }

    pub fn nrt() -> Self {
        Self {
            code: "NRT".into(),
            name: "Narita International Airport".into(),
            city: "Tokyo".into(),
            country: "Japan".into(),
            position: Vector2::new(8000.0, 1000.0),
            elevation: 135.0,
            runways: vec![
                Runway::new("16L/34R", 13123.0, 197.0, 160.0, -100.0, 0.0),
                Runway::new("16R/34L", 8202.0, 197.0, 160.0, 100.0, 0.0),
            ],
            color: [255, 0, 150],
        }
    }
}
