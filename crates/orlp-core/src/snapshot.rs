//! Read-only views of the simulation for renderers
//!
//! A snapshot is a copy: renderers can hold, serialize, or diff it without
//! touching the engine's world.

use hecs::{Entity, World};
use orlp_logic::geometry::Vec2;
use orlp_logic::metrics::Metrics;
use orlp_logic::parameters::SimParameters;
use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::generation::FieldLayout;
use crate::systems::Particle;

/// Drawable state of one debris item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebrisView {
    pub id: u32,
    pub position: Vec2,
    pub size: f64,
    pub color: DebrisColor,
    pub removed: bool,
    /// Processing progress, 0.0-1.0.
    pub progress: f64,
    pub claimed_by: Option<u32>,
}

/// Drawable state of one recycler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecyclerView {
    pub id: u32,
    pub position: Vec2,
    pub range: f64,
    pub energy: f64,
    /// Remaining energy relative to the starting share.
    pub energy_fraction: f64,
    pub low_energy: bool,
    /// Id of the debris being processed.
    pub target: Option<u32>,
    /// Position of that debris, for drawing the tether line.
    pub target_position: Option<Vec2>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub debris: Vec<DebrisView>,
    pub recyclers: Vec<RecyclerView>,
    pub particles: Vec<Particle>,
    pub metrics: Metrics,
    pub parameters: SimParameters,
    /// Parameters waiting for the next reset.
    pub pending_parameters: Option<SimParameters>,
    pub running: bool,
    pub paused: bool,
}

/// Views of every debris item, in id order.
pub fn debris_views(world: &World, layout: &FieldLayout) -> Vec<DebrisView> {
    layout
        .debris
        .iter()
        .filter_map(|&e| debris_view(world, e))
        .collect()
}

/// Views of every recycler, in id order.
pub fn recycler_views(world: &World, layout: &FieldLayout) -> Vec<RecyclerView> {
    layout
        .recyclers
        .iter()
        .filter_map(|&e| recycler_view(world, e))
        .collect()
}

fn debris_view(world: &World, entity: Entity) -> Option<DebrisView> {
    let debris = world.get::<&Debris>(entity).ok()?;
    let pos = world.get::<&Position>(entity).ok()?;
    let removal = world.get::<&Removal>(entity).ok()?;
    Some(DebrisView {
        id: debris.id,
        position: pos.0,
        size: debris.size,
        color: debris.color,
        removed: removal.removed,
        progress: removal.progress(),
        claimed_by: removal.claimed_by,
    })
}

fn recycler_view(world: &World, entity: Entity) -> Option<RecyclerView> {
    let recycler = world.get::<&Recycler>(entity).ok()?;
    let pos = world.get::<&Position>(entity).ok()?;

    let target = recycler.target.and_then(|t| {
        let id = world.get::<&Debris>(t).ok()?.id;
        let at = world.get::<&Position>(t).ok()?.0;
        Some((id, at))
    });

    Some(RecyclerView {
        id: recycler.id,
        position: pos.0,
        range: recycler.range,
        energy: recycler.energy,
        energy_fraction: recycler.energy_fraction(),
        low_energy: recycler.is_low_on_energy(),
        target: target.map(|(id, _)| id),
        target_position: target.map(|(_, at)| at),
    })
}
