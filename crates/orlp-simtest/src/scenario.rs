//! Scenario presets — parameter sets plus how long and how finely to run them.

use orlp_logic::parameters::{ParameterError, SimParameters};
use serde::Deserialize;

/// One preset from `data/scenarios.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Missing keys fall back to the simulator defaults.
    #[serde(default)]
    pub parameters: SimParameters,
    pub duration_seconds: f64,
    pub frame_seconds: f64,
}

impl Scenario {
    pub fn frame_count(&self) -> usize {
        if self.frame_seconds <= 0.0 {
            return 0;
        }
        (self.duration_seconds / self.frame_seconds).ceil() as usize
    }
}

/// Parse and validate a list of scenarios.
pub fn parse_scenarios(json: &str) -> Result<Vec<Scenario>, ScenarioError> {
    let scenarios: Vec<Scenario> = serde_json::from_str(json)?;
    for s in &scenarios {
        s.parameters
            .validate()
            .map_err(|source| ScenarioError::InvalidParameters {
                scenario: s.name.clone(),
                source,
            })?;
        let frame_ok = s.frame_seconds.is_finite() && s.frame_seconds > 0.0;
        let duration_ok = s.duration_seconds.is_finite() && s.duration_seconds >= 0.0;
        if !frame_ok || !duration_ok {
            return Err(ScenarioError::InvalidTiming {
                scenario: s.name.clone(),
            });
        }
    }
    Ok(scenarios)
}

/// Errors while loading scenario presets
#[derive(Debug)]
pub enum ScenarioError {
    Json(serde_json::Error),
    InvalidParameters {
        scenario: String,
        source: ParameterError,
    },
    InvalidTiming {
        scenario: String,
    },
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Json(e)
    }
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Json(e) => write!(f, "JSON parse error: {}", e),
            ScenarioError::InvalidParameters { scenario, source } => {
                write!(f, "scenario '{}': {}", scenario, source)
            }
            ScenarioError::InvalidTiming { scenario } => write!(
                f,
                "scenario '{}': frame_seconds must be positive and duration non-negative",
                scenario
            ),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Json(e) => Some(e),
            ScenarioError::InvalidParameters { source, .. } => Some(source),
            ScenarioError::InvalidTiming { .. } => None,
        }
    }
}
