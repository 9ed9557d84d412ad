//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod common;
mod debris;
mod recycler;

pub use common::*;
pub use debris::*;
pub use recycler::*;
