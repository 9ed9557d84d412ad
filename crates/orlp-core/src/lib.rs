//! ORLP Core - Orbital Recycling Simulation Engine
//!
//! An ECS-based simulation of a debris field on circular orbits, cleared by a
//! small fleet of recyclers that lock onto nearby debris and process it away
//! while spending a shared energy budget.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: debris items and recyclers
//! - **Components**: pure data (Orbit, Position, Debris, Removal, Recycler)
//! - **Systems**: orbit advance, target acquisition and processing, effects
//!
//! The [`engine::SimulationEngine`] owns the world and is the single writer.
//! Renderers read it through [`snapshot::SimulationSnapshot`] and the removal
//! event queue.
//!
//! # Example
//!
//! ```rust,no_run
//! use orlp_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new(EngineConfig::default());
//! engine.start();
//!
//! loop {
//!     engine.frame();
//!     let snapshot = engine.snapshot();
//!     // draw snapshot.debris / snapshot.recyclers
//!     # let _ = snapshot;
//! }
//! ```

pub mod clock;
pub mod components;
pub mod engine;
pub mod generation;
pub mod snapshot;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, MonotonicClock};
    pub use crate::components::*;
    pub use crate::engine::{EngineConfig, ParameterChange, RunState, SimulationEngine};
    pub use crate::snapshot::{DebrisView, RecyclerView, SimulationSnapshot};
    pub use crate::systems::{Particle, RemovalEvent};
    pub use orlp_logic::metrics::Metrics;
    pub use orlp_logic::parameters::{ParameterError, SimParameters};
}
