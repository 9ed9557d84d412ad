//! Recycler components.

use hecs::Entity;
use orlp_logic::constants::LOW_ENERGY_FRACTION;
use serde::{Deserialize, Serialize};

/// A mobile agent that locks onto debris in range and processes it away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recycler {
    pub id: u32,
    /// Remaining energy. Decreases while processing; may dip below zero by
    /// at most one frame's consumption.
    pub energy: f64,
    /// Share of the budget assigned at generation.
    pub initial_energy: f64,
    /// Interaction radius.
    pub range: f64,
    /// Debris currently held. A lookup handle only; the debris is owned by
    /// the world.
    #[serde(skip)]
    pub target: Option<Entity>,
}

impl Recycler {
    pub fn new(id: u32, energy: f64, range: f64) -> Self {
        Self {
            id,
            energy,
            initial_energy: energy,
            range,
            target: None,
        }
    }

    pub fn has_energy(&self) -> bool {
        self.energy > 0.0
    }

    /// Remaining energy relative to the starting share, for gauges.
    pub fn energy_fraction(&self) -> f64 {
        if self.initial_energy <= 0.0 {
            0.0
        } else {
            self.energy / self.initial_energy
        }
    }

    pub fn is_low_on_energy(&self) -> bool {
        self.energy_fraction() <= LOW_ENERGY_FRACTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_fraction() {
        let mut r = Recycler::new(0, 200.0, 30.0);
        assert_eq!(r.energy_fraction(), 1.0);
        assert!(!r.is_low_on_energy());
        r.energy = 50.0;
        assert_eq!(r.energy_fraction(), 0.25);
        assert!(r.is_low_on_energy());
        assert!(r.has_energy());
        r.energy = -0.1;
        assert!(!r.has_energy());
    }

    #[test]
    fn test_zero_budget_gauge() {
        let r = Recycler::new(0, 0.0, 30.0);
        assert_eq!(r.energy_fraction(), 0.0);
        assert!(!r.has_energy());
    }
}
