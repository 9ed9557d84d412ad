//! Debris components.

use orlp_logic::constants::processing::REMOVAL_SECONDS;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Marks an entity as a debris item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Debris {
    pub id: u32,
    /// Visual radius in pixels.
    pub size: f64,
    pub color: DebrisColor,
}

/// Debris palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebrisColor {
    Orange,
    Brown,
    BlueGrey,
    Grey,
    Amber,
}

impl DebrisColor {
    pub const ALL: [DebrisColor; 5] = [
        DebrisColor::Orange,
        DebrisColor::Brown,
        DebrisColor::BlueGrey,
        DebrisColor::Grey,
        DebrisColor::Amber,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Removal progress of a debris item.
///
/// `removal_time` only grows while the item is being processed and is frozen
/// once `removed` is set. Removed debris stays in the world until the next
/// regeneration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Removal {
    pub removed: bool,
    /// Seconds of processing accumulated so far.
    pub removal_time: f64,
    /// Recycler currently holding this item, if any.
    pub claimed_by: Option<u32>,
}

impl Removal {
    /// Processing progress, 0.0-1.0.
    pub fn progress(&self) -> f64 {
        (self.removal_time / REMOVAL_SECONDS).min(1.0)
    }

    /// Whether `recycler_id` may lock onto this item.
    pub fn is_claimable_by(&self, recycler_id: u32) -> bool {
        !self.removed && self.claimed_by.map_or(true, |holder| holder == recycler_id)
    }
}
