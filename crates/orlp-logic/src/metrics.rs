//! Run metrics and efficiency scoring.
//!
//! Efficiency blends how much of the field has been cleared (70%) with how
//! much of the energy budget is left (30%). It is recomputed from the
//! cumulative counters every frame rather than updated incrementally.

use serde::{Deserialize, Serialize};

const REMOVAL_WEIGHT: f64 = 0.7;
const ENERGY_WEIGHT: f64 = 0.3;

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Efficiency score, 0-100.
    pub efficiency: u32,
    /// Debris items removed so far.
    pub debris_removed: u32,
    /// Energy consumed by all recyclers.
    pub energy_used: f64,
    /// Simulated seconds while running and not paused.
    pub time_elapsed: f64,
}

impl Metrics {
    /// Recompute `efficiency` from the current counters.
    pub fn refresh_efficiency(&mut self, total_debris: u32, energy_budget: f64) {
        self.efficiency = efficiency(
            total_debris,
            self.debris_removed,
            self.energy_used,
            energy_budget,
        );
    }

    /// Fraction of the field removed (0.0 for an empty field).
    pub fn removal_rate(&self, total_debris: u32) -> f64 {
        removal_rate(total_debris, self.debris_removed)
    }
}

/// Fraction of debris removed.
pub fn removal_rate(total: u32, removed: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        removed as f64 / total as f64
    }
}

/// Share of the energy budget left unspent, floored at zero.
///
/// A non-positive budget leaves nothing to conserve and scores zero.
pub fn energy_factor(energy_used: f64, energy_budget: f64) -> f64 {
    if energy_budget <= 0.0 || !energy_budget.is_finite() {
        return 0.0;
    }
    (1.0 - energy_used / energy_budget).max(0.0)
}

/// Efficiency percentage for the given counters.
///
/// An empty field has no meaningful score and reports 0.
pub fn efficiency(total: u32, removed: u32, energy_used: f64, energy_budget: f64) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = removal_rate(total, removed) * REMOVAL_WEIGHT
        + energy_factor(energy_used, energy_budget) * ENERGY_WEIGHT;
    let pct = (score * 100.0).round();
    if pct.is_nan() {
        0
    } else {
        pct.clamp(0.0, 100.0) as u32
    }
}
