//! Target acquisition - nearest claimable debris within a recycler's range
//!
//! A linear scan over the field per recycler; fine at the few hundred items
//! the simulator generates.

use hecs::{Entity, World};

use crate::components::{Position, Removal};

/// Nearest debris that `recycler_id` may claim, no farther than `range`
/// from `origin`.
///
/// `debris` is scanned in order and only a strictly closer item replaces the
/// current best, so the first of several equidistant items wins.
pub fn find_nearest_debris(
    world: &World,
    debris: &[Entity],
    recycler_id: u32,
    origin: &Position,
    range: f64,
) -> Option<Entity> {
    let mut nearest = None;
    let mut min_distance = f64::INFINITY;

    for &entity in debris {
        let Ok(removal) = world.get::<&Removal>(entity) else {
            continue;
        };
        if !removal.is_claimable_by(recycler_id) {
            continue;
        }
        let Ok(pos) = world.get::<&Position>(entity) else {
            continue;
        };

        let distance = origin.distance(&pos);
        if distance < min_distance && distance <= range {
            min_distance = distance;
            nearest = Some(entity);
        }
    }

    nearest
}

/// Whether `target` is still a live item within `range` of `origin`.
pub fn target_in_range(world: &World, target: Entity, origin: &Position, range: f64) -> bool {
    let live = world
        .get::<&Removal>(target)
        .map(|r| !r.removed)
        .unwrap_or(false);
    live && world
        .get::<&Position>(target)
        .map(|p| origin.distance(&p) <= range)
        .unwrap_or(false)
}

/// Mark `target` as held by `recycler_id`.
pub fn claim(world: &mut World, target: Entity, recycler_id: u32) {
    if let Ok(mut removal) = world.get::<&mut Removal>(target) {
        removal.claimed_by = Some(recycler_id);
    }
}

/// Drop `recycler_id`'s hold on `target`, leaving other holders untouched.
pub fn release(world: &mut World, target: Entity, recycler_id: u32) {
    if let Ok(mut removal) = world.get::<&mut Removal>(target) {
        if removal.claimed_by == Some(recycler_id) {
            removal.claimed_by = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Debris, DebrisColor};
    use orlp_logic::geometry::Vec2;

    fn spawn_debris(world: &mut World, id: u32, x: f64, y: f64) -> Entity {
        world.spawn((
            Debris {
                id,
                size: 5.0,
                color: DebrisColor::Grey,
            },
            Position(Vec2::new(x, y)),
            Removal::default(),
        ))
    }

    #[test]
    fn test_picks_nearest_in_range() {
        let mut world = World::new();
        let far = spawn_debris(&mut world, 0, 25.0, 0.0);
        let near = spawn_debris(&mut world, 1, 10.0, 0.0);
        let out = spawn_debris(&mut world, 2, 31.0, 0.0);
        let list = [far, near, out];

        let found = find_nearest_debris(&world, &list, 0, &Position(Vec2::ZERO), 30.0);
        assert_eq!(found, Some(near));
    }

    #[test]
    fn test_out_of_range_never_selected() {
        let mut world = World::new();
        let a = spawn_debris(&mut world, 0, 30.5, 0.0);
        let b = spawn_debris(&mut world, 1, 0.0, -40.0);
        let found = find_nearest_debris(&world, &[a, b], 0, &Position(Vec2::ZERO), 30.0);
        assert_eq!(found, None);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mut world = World::new();
        let edge = spawn_debris(&mut world, 0, 30.0, 0.0);
        let found = find_nearest_debris(&world, &[edge], 0, &Position(Vec2::ZERO), 30.0);
        assert_eq!(found, Some(edge));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let mut world = World::new();
        let first = spawn_debris(&mut world, 0, 10.0, 0.0);
        let second = spawn_debris(&mut world, 1, -10.0, 0.0);
        let found = find_nearest_debris(&world, &[first, second], 0, &Position(Vec2::ZERO), 30.0);
        assert_eq!(found, Some(first));
        let found = find_nearest_debris(&world, &[second, first], 0, &Position(Vec2::ZERO), 30.0);
        assert_eq!(found, Some(second));
    }

    #[test]
    fn test_skips_removed_and_foreign_claims() {
        let mut world = World::new();
        let removed = spawn_debris(&mut world, 0, 1.0, 0.0);
        let foreign = spawn_debris(&mut world, 1, 2.0, 0.0);
        let own = spawn_debris(&mut world, 2, 3.0, 0.0);
        world.get::<&mut Removal>(removed).unwrap().removed = true;
        claim(&mut world, foreign, 9);
        claim(&mut world, own, 4);

        let list = [removed, foreign, own];
        let found = find_nearest_debris(&world, &list, 4, &Position(Vec2::ZERO), 30.0);
        assert_eq!(found, Some(own));
    }

    #[test]
    fn test_release_only_own_claim() {
        let mut world = World::new();
        let d = spawn_debris(&mut world, 0, 0.0, 0.0);
        claim(&mut world, d, 1);
        release(&mut world, d, 2);
        assert_eq!(world.get::<&Removal>(d).unwrap().claimed_by, Some(1));
        release(&mut world, d, 1);
        assert_eq!(world.get::<&Removal>(d).unwrap().claimed_by, None);
    }

    #[test]
    fn test_target_in_range() {
        let mut world = World::new();
        let d = spawn_debris(&mut world, 0, 20.0, 0.0);
        assert!(target_in_range(&world, d, &Position(Vec2::ZERO), 30.0));
        assert!(!target_in_range(&world, d, &Position(Vec2::new(-20.0, 0.0)), 30.0));
        world.get::<&mut Removal>(d).unwrap().removed = true;
        assert!(!target_in_range(&world, d, &Position(Vec2::ZERO), 30.0));
    }
}
