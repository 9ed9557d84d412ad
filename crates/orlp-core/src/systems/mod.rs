//! Systems - logic that operates on components

mod effects;
mod orbit;
mod recyclers;
mod targeting;

pub use effects::*;
pub use orbit::*;
pub use recyclers::*;
pub use targeting::*;
