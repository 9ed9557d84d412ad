//! Orbit system - advances every orbiting entity and refreshes its position

use hecs::World;
use orlp_logic::geometry::Vec2;

use crate::components::{Orbit, Position, Removal};

/// Advance orbits by `delta_seconds` and recompute positions around `center`.
///
/// Removed debris is frozen at its last position. Recyclers carry no
/// `Removal` component and always move.
pub fn orbit_system(world: &mut World, center: Vec2, delta_seconds: f64) {
    for (_, (orbit, pos, removal)) in world
        .query_mut::<(&mut Orbit, &mut Position, Option<&Removal>)>()
    {
        if removal.is_some_and(|r| r.removed) {
            continue;
        }
        orbit.advance(delta_seconds);
        pos.0 = orbit.point(center);
    }
}

/// Recompute every position around `center` without advancing any orbit.
///
/// Covers removed debris too, so frozen items follow a viewport change.
pub fn refresh_positions(world: &mut World, center: Vec2) {
    for (_, (orbit, pos)) in world.query_mut::<(&Orbit, &mut Position)>() {
        pos.0 = orbit.point(center);
    }
}
