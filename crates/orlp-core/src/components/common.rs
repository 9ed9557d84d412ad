//! Components shared by debris and recyclers.

use orlp_logic::geometry::{orbit_point, Vec2};
use serde::{Deserialize, Serialize};

/// Circular path around the field center.
///
/// `radius` is fixed at generation and never changes during a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Orbit {
    /// Current angle in radians (unbounded).
    pub angle: f64,
    pub radius: f64,
    /// Angular speed in radians per second.
    pub speed: f64,
}

impl Orbit {
    pub fn new(angle: f64, radius: f64, speed: f64) -> Self {
        Self {
            angle,
            radius,
            speed,
        }
    }

    pub fn advance(&mut self, delta_seconds: f64) {
        self.angle += self.speed * delta_seconds;
    }

    pub fn point(&self, center: Vec2) -> Vec2 {
        orbit_point(center, self.angle, self.radius)
    }
}

/// Cartesian position in viewport pixels, derived from the orbit each step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position(pub Vec2);

impl Position {
    pub fn distance(&self, other: &Position) -> f64 {
        self.0.distance(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_advance_keeps_radius() {
        let mut o = Orbit::new(0.0, 42.0, 0.5);
        o.advance(2.0);
        assert_eq!(o.angle, 1.0);
        assert_eq!(o.radius, 42.0);
        let p = o.point(Vec2::ZERO);
        assert!((p.length() - 42.0).abs() < 1e-9);
    }
}
