//! Recycler fleet generation

use std::f64::consts::TAU;

use hecs::{Entity, World};
use orlp_logic::constants::generation::{RECYCLER_BASE_SPEED, RECYCLER_RADIUS_DIVISOR};
use orlp_logic::constants::processing::RECYCLER_RANGE;
use orlp_logic::fleet::{energy_share, recycler_count};
use orlp_logic::geometry::Vec2;
use orlp_logic::parameters::SimParameters;

use crate::components::*;

/// Spawn the recycler fleet, evenly spaced on a single path, each with an
/// equal share of the energy budget.
pub fn generate_recyclers(world: &mut World, params: &SimParameters, center: Vec2) -> Vec<Entity> {
    let count = recycler_count(params.debris_count);
    let energy = energy_share(params.energy_budget, count);
    let radius = params.orbit_height / RECYCLER_RADIUS_DIVISOR;
    let speed = RECYCLER_BASE_SPEED * params.recycler_speed;

    let mut entities = Vec::with_capacity(count as usize);
    for i in 0..count {
        let orbit = Orbit::new(TAU * i as f64 / count as f64, radius, speed);
        let position = Position(orbit.point(center));
        let entity = world.spawn((Recycler::new(i, energy, RECYCLER_RANGE), orbit, position));
        entities.push(entity);
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(debris_count: u32) -> (World, Vec<Entity>) {
        let mut world = World::new();
        let params = SimParameters {
            debris_count,
            energy_budget: 600.0,
            ..SimParameters::default()
        };
        let recyclers = generate_recyclers(&mut world, &params, Vec2::ZERO);
        (world, recyclers)
    }

    #[test]
    fn test_fleet_of_three_splits_budget() {
        let (world, recyclers) = spawn(150);
        assert_eq!(recyclers.len(), 3);
        for e in &recyclers {
            let r = world.get::<&Recycler>(*e).unwrap();
            assert!((r.energy - 200.0).abs() < 1e-9);
            assert_eq!(r.range, RECYCLER_RANGE);
            assert!(r.target.is_none());
        }
    }

    #[test]
    fn test_small_field_gets_full_budget() {
        let (world, recyclers) = spawn(10);
        assert_eq!(recyclers.len(), 1);
        let r = world.get::<&Recycler>(recyclers[0]).unwrap();
        assert_eq!(r.energy, 600.0);
    }

    #[test]
    fn test_path_and_speed() {
        let (world, recyclers) = spawn(100);
        let o0 = world.get::<&Orbit>(recyclers[0]).unwrap();
        let o1 = world.get::<&Orbit>(recyclers[1]).unwrap();
        assert_eq!(o0.radius, 50.0);
        assert!((o0.speed - 0.15).abs() < 1e-12);
        assert!((o1.angle - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_no_debris_no_recyclers() {
        let (_, recyclers) = spawn(0);
        assert!(recyclers.is_empty());
    }
}
