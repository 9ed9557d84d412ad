//! Recycler system - target upkeep, acquisition, and debris processing
//!
//! Runs once per step after the orbit system. Recyclers are handled one at a
//! time in id order; each one finishes its acquire/process cycle before the
//! next starts, so a removal by an earlier recycler is visible to later ones
//! within the same step.

use hecs::{Entity, World};
use orlp_logic::constants::processing::{ENERGY_PER_SECOND, REMOVAL_SECONDS};
use orlp_logic::geometry::Vec2;
use orlp_logic::metrics::Metrics;
use serde::{Deserialize, Serialize};

use super::targeting::{claim, find_nearest_debris, release, target_in_range};
use crate::components::{Debris, Position, Recycler, Removal};

/// Emitted when a recycler finishes processing a debris item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemovalEvent {
    pub debris_id: u32,
    pub recycler_id: u32,
    /// Last position of the removed debris.
    pub position: Vec2,
}

/// Advance every recycler's interaction by `delta_seconds`.
///
/// Updates `metrics.energy_used` and `metrics.debris_removed` and returns
/// the removals completed this step.
pub fn recycler_system(
    world: &mut World,
    recyclers: &[Entity],
    debris: &[Entity],
    metrics: &mut Metrics,
    delta_seconds: f64,
) -> Vec<RemovalEvent> {
    let mut events = Vec::new();

    for &entity in recyclers {
        let (id, origin, range, mut target, mut energy, powered) = {
            let Ok(recycler) = world.get::<&Recycler>(entity) else {
                continue;
            };
            let Ok(pos) = world.get::<&Position>(entity) else {
                continue;
            };
            (
                recycler.id,
                *pos,
                recycler.range,
                recycler.target,
                recycler.energy,
                recycler.has_energy(),
            )
        };

        // Drop a target that was removed, has drifted out of range, or can
        // no longer be worked on
        if let Some(t) = target {
            if !powered || !target_in_range(world, t, &origin, range) {
                release(world, t, id);
                target = None;
            }
        }

        // A dry recycler never claims, so others in range can take over
        if !powered {
            write_back(world, entity, None, energy);
            continue;
        }

        if target.is_none() {
            target = find_nearest_debris(world, debris, id, &origin, range);
            if let Some(t) = target {
                claim(world, t, id);
            }
        }

        if let Some(t) = target {
            let consumed = ENERGY_PER_SECOND * delta_seconds;
            energy -= consumed;
            metrics.energy_used += consumed;
            if energy <= 0.0 {
                log::warn!("Recycler {} ran out of energy", id);
            }

            if let Some(event) = progress_removal(world, t, id, delta_seconds) {
                log::debug!(
                    "Recycler {} removed debris {} at ({:.1}, {:.1})",
                    id,
                    event.debris_id,
                    event.position.x,
                    event.position.y
                );
                metrics.debris_removed += 1;
                target = None;
                events.push(event);
            }
        }

        write_back(world, entity, target, energy);
    }

    events
}

fn write_back(world: &mut World, entity: Entity, target: Option<Entity>, energy: f64) {
    if let Ok(mut recycler) = world.get::<&mut Recycler>(entity) {
        recycler.target = target;
        recycler.energy = energy;
    }
}

/// Add `delta_seconds` of processing to `target`; completes the removal once
/// the threshold is reached.
fn progress_removal(
    world: &mut World,
    target: Entity,
    recycler_id: u32,
    delta_seconds: f64,
) -> Option<RemovalEvent> {
    let debris_id = world.get::<&Debris>(target).ok()?.id;
    let position = world.get::<&Position>(target).ok()?.0;
    let mut removal = world.get::<&mut Removal>(target).ok()?;

    removal.removal_time += delta_seconds;
    if removal.removal_time < REMOVAL_SECONDS {
        return None;
    }

    removal.removed = true;
    removal.claimed_by = None;
    Some(RemovalEvent {
        debris_id,
        recycler_id,
        position,
    })
}
