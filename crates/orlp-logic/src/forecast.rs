//! Pre-run forecast — a heuristic read of the parameters shown next to the
//! simulator before a run starts.
//!
//! Nothing here simulates. The forecast is a fixed linear rule over the
//! parameters, clamped to a plausible band, plus threshold-based findings.

use serde::{Deserialize, Serialize};

use crate::parameters::SimParameters;

const EFFICIENCY_FLOOR: f64 = 60.0;
const EFFICIENCY_CEILING: f64 = 95.0;

/// Assessment of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finding {
    /// Orbit below 400 km.
    LowOrbitCollisionRisk,
    /// Orbit above 800 km.
    HighOrbitEnergyCost,
    OptimalOrbit,
    /// More than 200 debris items.
    DenseDebrisField,
    ManageableDebrisField,
    /// Speed multiplier above 7.
    SpeedReducesPrecision,
    /// Speed multiplier below 3.
    ConservativeSpeed,
    BalancedSpeed,
}

/// Severity of a finding, for icon selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Ok,
    Info,
    Warning,
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Finding::LowOrbitCollisionRisk
            | Finding::DenseDebrisField
            | Finding::SpeedReducesPrecision => Severity::Warning,
            Finding::HighOrbitEnergyCost | Finding::ConservativeSpeed => Severity::Info,
            Finding::OptimalOrbit | Finding::ManageableDebrisField | Finding::BalancedSpeed => {
                Severity::Ok
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Finding::LowOrbitCollisionRisk => "Low orbit height increases collision risk",
            Finding::HighOrbitEnergyCost => "High orbit requires more energy for debris removal",
            Finding::OptimalOrbit => "Optimal orbit height for debris removal",
            Finding::DenseDebrisField => "High debris density may overwhelm recyclers",
            Finding::ManageableDebrisField => "Manageable debris count for efficient cleanup",
            Finding::SpeedReducesPrecision => {
                "High speed may reduce precision and increase energy consumption"
            }
            Finding::ConservativeSpeed => "Conservative speed ensures accuracy but may be slow",
            Finding::BalancedSpeed => "Balanced speed for optimal performance",
        }
    }
}

/// Full forecast for a parameter set. Produced only, never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// One finding each for orbit, debris, and speed, in that order.
    pub findings: Vec<Finding>,
    /// Predicted efficiency percentage, 60-95.
    pub predicted_efficiency: u32,
    /// Predicted energy spend over a full run.
    pub predicted_energy_usage: u32,
    pub recommendations: Vec<&'static str>,
}

/// Build the forecast for `p`.
pub fn forecast(p: &SimParameters) -> Forecast {
    let efficiency = raw_efficiency(p);
    Forecast {
        findings: vec![orbit_finding(p), debris_finding(p), speed_finding(p)],
        predicted_efficiency: efficiency.round() as u32,
        predicted_energy_usage: predicted_energy_usage(p),
        recommendations: recommendations(p, efficiency),
    }
}

fn orbit_finding(p: &SimParameters) -> Finding {
    if p.orbit_height < 400.0 {
        Finding::LowOrbitCollisionRisk
    } else if p.orbit_height > 800.0 {
        Finding::HighOrbitEnergyCost
    } else {
        Finding::OptimalOrbit
    }
}

fn debris_finding(p: &SimParameters) -> Finding {
    if p.debris_count > 200 {
        Finding::DenseDebrisField
    } else {
        Finding::ManageableDebrisField
    }
}

fn speed_finding(p: &SimParameters) -> Finding {
    if p.recycler_speed > 7.0 {
        Finding::SpeedReducesPrecision
    } else if p.recycler_speed < 3.0 {
        Finding::ConservativeSpeed
    } else {
        Finding::BalancedSpeed
    }
}

fn raw_efficiency(p: &SimParameters) -> f64 {
    let score = 85.0 - (p.debris_count as f64 - 100.0) * 0.1 + (p.recycler_speed - 5.0) * 2.0
        - (p.orbit_height - 400.0).abs() * 0.02;
    score.clamp(EFFICIENCY_FLOOR, EFFICIENCY_CEILING)
}

/// Predicted energy spend: a share of the budget that grows with debris
/// density, capped at 70%.
pub fn predicted_energy_usage(p: &SimParameters) -> u32 {
    if p.energy_budget <= 0.0 {
        return 0;
    }
    let conserved = (1.0 - (p.debris_count as f64 / p.energy_budget) * 0.5).max(0.3);
    (p.energy_budget * (1.0 - conserved)).round() as u32
}

fn recommendations(p: &SimParameters, efficiency: f64) -> Vec<&'static str> {
    let mut out = Vec::new();
    if p.debris_count > 200 {
        out.push("Consider reducing debris count or increasing recycler capacity for better efficiency");
    }
    if p.recycler_speed > 7.0 {
        out.push("Lower recycler speed may improve precision and reduce energy consumption");
    }
    if p.orbit_height < 300.0 || p.orbit_height > 800.0 {
        out.push("Orbit height outside 300-800km range may impact efficiency");
    }
    if efficiency > 90.0 {
        out.push("Excellent parameter combination! This should yield high performance");
    }
    out
}
