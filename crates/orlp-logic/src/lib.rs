//! Pure simulation logic for the ORLP orbital recycling simulator.
//!
//! This crate contains every rule of the simulator that does not need an
//! entity store or a clock. Functions take plain data and return results,
//! which keeps them unit-testable and shareable between the ECS engine and
//! the headless harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Tuning constants (removal time, energy rate, ranges, palette) |
//! | [`fleet`] | Recycler count and per-recycler energy share |
//! | [`forecast`] | Heuristic efficiency forecast and recommendations |
//! | [`geometry`] | 2D vectors and circular-orbit placement |
//! | [`metrics`] | Efficiency scoring from cumulative counters |
//! | [`parameters`] | Simulation parameters, validation, slider bounds |

pub mod constants;
pub mod fleet;
pub mod forecast;
pub mod geometry;
pub mod metrics;
pub mod parameters;
