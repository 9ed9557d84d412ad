//! Debris field generation

use std::f64::consts::TAU;

use hecs::{Entity, World};
use orlp_logic::constants::generation::*;
use orlp_logic::geometry::Vec2;
use orlp_logic::parameters::SimParameters;
use rand::Rng;

use crate::components::*;

/// Spawn `params.debris_count` debris items spread evenly around the field
/// with jittered angle, radius, size, and speed.
pub fn generate_debris(
    world: &mut World,
    params: &SimParameters,
    center: Vec2,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    let count = params.debris_count;
    let mut entities = Vec::with_capacity(count as usize);
    let base_radius = params.orbit_height / DEBRIS_RADIUS_DIVISOR;

    for i in 0..count {
        let angle = TAU * i as f64 / count as f64 + rng.gen_range(0.0..DEBRIS_ANGLE_JITTER);
        let radius = base_radius + rng.gen_range(0.0..DEBRIS_RADIUS_JITTER);
        let size = rng.gen_range(DEBRIS_MIN_SIZE..DEBRIS_MAX_SIZE);
        let speed = rng.gen_range(DEBRIS_MIN_SPEED..DEBRIS_MAX_SPEED);

        let orbit = Orbit::new(angle, radius, speed);
        let position = Position(orbit.point(center));

        let entity = world.spawn((
            Debris {
                id: i,
                size,
                color: DebrisColor::random(rng),
            },
            orbit,
            position,
            Removal::default(),
        ));
        entities.push(entity);
    }

    entities
}
