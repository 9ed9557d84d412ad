//! 2D geometry for the orbital plane.
//!
//! Everything moves on a circle around a shared center, so the only
//! operations needed are polar placement and point distance.

use serde::{Deserialize, Serialize};

/// 2D point or vector in viewport pixels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Point on a circle of `radius` around `center` at `angle` radians.
///
/// Angles are never wrapped; only their sine and cosine matter.
pub fn orbit_point(center: Vec2, angle: f64, radius: f64) -> Vec2 {
    Vec2 {
        x: center.x + angle.cos() * radius,
        y: center.y + angle.sin() * radius,
    }
}

/// Viewport dimensions reported by the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the orbital plane.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let (width, height) = crate::constants::DEFAULT_VIEWPORT;
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_orbit_point_cardinal_angles() {
        let c = Vec2::new(100.0, 50.0);
        let p0 = orbit_point(c, 0.0, 10.0);
        assert!((p0.x - 110.0).abs() < 1e-9);
        assert!((p0.y - 50.0).abs() < 1e-9);

        let p90 = orbit_point(c, PI / 2.0, 10.0);
        assert!((p90.x - 100.0).abs() < 1e-9);
        assert!((p90.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_unwrapped_angle_matches_wrapped() {
        let c = Vec2::ZERO;
        let a = orbit_point(c, 0.3, 40.0);
        let b = orbit_point(c, 0.3 + 2.0 * PI * 7.0, 40.0);
        assert!(a.distance(&b) < 1e-9);
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(a.distance_squared(&b), 25.0);
        assert_eq!((b - a).length(), 5.0);
    }

    #[test]
    fn test_viewport_center() {
        let v = Viewport::new(800.0, 600.0);
        assert_eq!(v.center(), Vec2::new(400.0, 300.0));
        assert_eq!(Viewport::default(), v);
    }
}
