//! Simulator constants — processing rates, generation ranges, effect tuning.
//!
//! Plain values with no runtime dependency. Both the engine and the harness
//! read them from here.

/// Recycler processing.
pub mod processing {
    /// Seconds of continuous processing needed to remove one debris item.
    pub const REMOVAL_SECONDS: f64 = 2.0;
    /// Energy consumed per second while a recycler is processing.
    pub const ENERGY_PER_SECOND: f64 = 2.0;
    /// Interaction radius of every recycler.
    pub const RECYCLER_RANGE: f64 = 30.0;
}

/// Fleet sizing.
pub mod fleet {
    /// Upper bound on recyclers regardless of debris count.
    pub const MAX_RECYCLERS: u32 = 3;
    /// One recycler is deployed per this many debris items (rounded up).
    pub const DEBRIS_PER_RECYCLER: u32 = 50;
}

/// Debris and recycler placement at generation time.
pub mod generation {
    /// Debris orbit radius is `orbit_height / DEBRIS_RADIUS_DIVISOR` plus jitter.
    pub const DEBRIS_RADIUS_DIVISOR: f64 = 10.0;
    /// Upper bound of the uniform radius jitter added to each debris orbit.
    pub const DEBRIS_RADIUS_JITTER: f64 = 50.0;
    /// Upper bound of the uniform angle jitter added to even spacing.
    pub const DEBRIS_ANGLE_JITTER: f64 = 0.5;
    pub const DEBRIS_MIN_SIZE: f64 = 4.0;
    pub const DEBRIS_MAX_SIZE: f64 = 12.0;
    /// Debris angular speed range (rad/s).
    pub const DEBRIS_MIN_SPEED: f64 = 0.01;
    pub const DEBRIS_MAX_SPEED: f64 = 0.03;
    /// Recycler path radius is `orbit_height / RECYCLER_RADIUS_DIVISOR`.
    pub const RECYCLER_RADIUS_DIVISOR: f64 = 8.0;
    /// Recycler angular speed per unit of the speed multiplier (rad/s).
    pub const RECYCLER_BASE_SPEED: f64 = 0.03;
}

/// Removal burst particles.
pub mod effects {
    pub const PARTICLES_PER_BURST: usize = 8;
    /// Half-width of the uniform per-axis velocity range (px/s).
    pub const PARTICLE_MAX_SPEED: f64 = 50.0;
    pub const PARTICLE_DECAY_PER_FRAME: f64 = 0.02;
    pub const PARTICLE_MIN_SIZE: f64 = 2.0;
    pub const PARTICLE_MAX_SIZE: f64 = 6.0;
    /// Particles advance on a fixed step, independent of frame delta.
    pub const PARTICLE_FRAME_SECONDS: f64 = 0.016;
}

/// Energy fraction below which a recycler's gauge is drawn as low.
pub const LOW_ENERGY_FRACTION: f64 = 0.3;

/// Default viewport used before the renderer reports its size.
pub const DEFAULT_VIEWPORT: (f64, f64) = (800.0, 600.0);
