//! Generation - procedural creation of the debris field and recycler fleet.

mod debris;
mod recyclers;

pub use debris::*;
pub use recyclers::*;

use hecs::{Entity, World};
use orlp_logic::geometry::Vec2;
use orlp_logic::parameters::SimParameters;
use rand::Rng;

/// Entity handles of one generated field, in id order.
///
/// Systems walk these lists instead of querying so that iteration order (and
/// with it nearest-target tie breaking) follows ids.
#[derive(Debug, Clone, Default)]
pub struct FieldLayout {
    pub debris: Vec<Entity>,
    pub recyclers: Vec<Entity>,
}

/// Populate `world` with debris and recyclers for `params`.
pub fn generate_field(
    world: &mut World,
    params: &SimParameters,
    center: Vec2,
    rng: &mut impl Rng,
) -> FieldLayout {
    let debris = generate_debris(world, params, center, rng);
    let recyclers = generate_recyclers(world, params, center);
    FieldLayout { debris, recyclers }
}
