//! Simulation parameters — the four inputs that shape a debris field.
//!
//! Parameters are plain data with serde support so scenario files can
//! override any subset; missing keys fall back to [`SimParameters::default`].
//! Validation only rejects values the stepper cannot integrate (negative or
//! non-finite). Zero counts are legal and produce an empty simulation.

use serde::{Deserialize, Serialize};

/// External configuration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParameters {
    /// Orbit height in km; scales both debris and recycler path radii.
    pub orbit_height: f64,
    /// Number of debris items generated.
    pub debris_count: u32,
    /// Recycler angular speed multiplier.
    pub recycler_speed: f64,
    /// Total energy shared by all recyclers.
    pub energy_budget: f64,
}

impl Default for SimParameters {
    fn default() -> Self {
        Self {
            orbit_height: 400.0,
            debris_count: 100,
            recycler_speed: 5.0,
            energy_budget: 500.0,
        }
    }
}

impl SimParameters {
    /// Check that every value can be integrated.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check("orbit_height", self.orbit_height)?;
        check("recycler_speed", self.recycler_speed)?;
        check("energy_budget", self.energy_budget)?;
        Ok(())
    }
}

fn check(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { name });
    }
    if value < 0.0 {
        return Err(ParameterError::Negative { name, value });
    }
    Ok(())
}

/// Slider ranges offered by the course UI.
///
/// The engine does not enforce these; front ends call [`ParameterBounds::clamp`]
/// before handing parameters over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    pub orbit_height: (f64, f64),
    pub debris_count: (u32, u32),
    pub recycler_speed: (f64, f64),
    pub energy_budget: (f64, f64),
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            orbit_height: (200.0, 1000.0),
            debris_count: (10, 100),
            recycler_speed: (1.0, 5.0),
            energy_budget: (100.0, 1000.0),
        }
    }
}

impl ParameterBounds {
    /// Pull every parameter into its slider range.
    pub fn clamp(&self, p: &SimParameters) -> SimParameters {
        SimParameters {
            orbit_height: p.orbit_height.clamp(self.orbit_height.0, self.orbit_height.1),
            debris_count: p.debris_count.clamp(self.debris_count.0, self.debris_count.1),
            recycler_speed: p
                .recycler_speed
                .clamp(self.recycler_speed.0, self.recycler_speed.1),
            energy_budget: p
                .energy_budget
                .clamp(self.energy_budget.0, self.energy_budget.1),
        }
    }

    pub fn contains(&self, p: &SimParameters) -> bool {
        self.clamp(p) == *p
    }
}

/// Rejected parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    NotFinite { name: &'static str },
    Negative { name: &'static str, value: f64 },
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterError::NotFinite { name } => write!(f, "{} must be a finite number", name),
            ParameterError::Negative { name, value } => {
                write!(f, "{} must not be negative (got {})", name, value)
            }
        }
    }
}

impl std::error::Error for ParameterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let p = SimParameters::default();
        assert!(p.validate().is_ok());
        assert_eq!(p.debris_count, 100);
        assert_eq!(p.orbit_height, 400.0);
    }

    #[test]
    fn test_zero_values_are_valid() {
        let p = SimParameters {
            orbit_height: 0.0,
            debris_count: 0,
            recycler_speed: 0.0,
            energy_budget: 0.0,
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_rejects_nan_and_negative() {
        let nan = SimParameters {
            recycler_speed: f64::NAN,
            ..SimParameters::default()
        };
        assert_eq!(
            nan.validate(),
            Err(ParameterError::NotFinite {
                name: "recycler_speed"
            })
        );

        let neg = SimParameters {
            energy_budget: -1.0,
            ..SimParameters::default()
        };
        let err = neg.validate().unwrap_err();
        assert!(err.to_string().contains("energy_budget"));
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = ParameterBounds::default();
        let wild = SimParameters {
            orbit_height: 5000.0,
            debris_count: 2,
            recycler_speed: 9.0,
            energy_budget: 50.0,
        };
        let c = bounds.clamp(&wild);
        assert_eq!(c.orbit_height, 1000.0);
        assert_eq!(c.debris_count, 10);
        assert_eq!(c.recycler_speed, 5.0);
        assert_eq!(c.energy_budget, 100.0);
        assert!(bounds.contains(&c));
        assert!(!bounds.contains(&wild));
    }
}
