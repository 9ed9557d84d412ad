//! Simulation engine - main entry point for running the simulation

use hecs::World;
use orlp_logic::geometry::Viewport;
use orlp_logic::metrics::Metrics;
use orlp_logic::parameters::{ParameterError, SimParameters};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::{Clock, MonotonicClock};
use crate::components::*;
use crate::generation::{generate_field, FieldLayout};
use crate::snapshot::{debris_views, recycler_views, SimulationSnapshot};
use crate::systems::*;

/// Run state of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
    Paused,
}

/// Outcome of a parameter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterChange {
    /// Field regenerated with the new parameters.
    Applied,
    /// A run is in progress; the parameters take effect at the next reset.
    Deferred,
}

/// Engine construction options.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub parameters: SimParameters,
    pub viewport: Viewport,
    /// Seed for field generation and effects. `None` draws one from the OS.
    pub seed: Option<u64>,
}

/// Main simulation engine
pub struct SimulationEngine {
    /// ECS world containing all debris and recyclers
    world: World,
    /// Entities of the current field, in id order
    layout: FieldLayout,
    parameters: SimParameters,
    pending_parameters: Option<SimParameters>,
    metrics: Metrics,
    state: RunState,
    viewport: Viewport,
    /// Removals not yet collected by the renderer
    removals: Vec<RemovalEvent>,
    particles: ParticleField,
    rng: StdRng,

    // Frame timing
    clock: Box<dyn Clock>,
    last_frame: f64,
}

impl SimulationEngine {
    /// Create an engine driven by the real clock, with a generated field.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }

    /// Create an engine driven by `clock`.
    pub fn with_clock(config: EngineConfig, clock: impl Clock + 'static) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut engine = Self {
            world: World::new(),
            layout: FieldLayout::default(),
            parameters: config.parameters,
            pending_parameters: None,
            metrics: Metrics::default(),
            state: RunState::Stopped,
            viewport: config.viewport,
            removals: Vec::new(),
            particles: ParticleField::new(),
            rng,
            clock: Box::new(clock),
            last_frame: 0.0,
        };
        engine.regenerate();
        engine
    }

    /// Begin running. A no-op when a run is already in progress.
    pub fn start(&mut self) {
        if self.state != RunState::Stopped {
            return;
        }
        self.state = RunState::Running;
        self.last_frame = self.clock.now();
        log::info!(
            "Simulation started: {} debris, {} recyclers",
            self.layout.debris.len(),
            self.layout.recyclers.len()
        );
    }

    /// Pause a running simulation, or resume a paused one.
    ///
    /// Resuming re-anchors the frame clock so the paused interval is not
    /// integrated as motion. Does nothing while stopped.
    pub fn toggle_pause(&mut self) {
        match self.state {
            RunState::Stopped => {}
            RunState::Running => {
                self.state = RunState::Paused;
                log::info!("Simulation paused at {:.2}s", self.metrics.time_elapsed);
            }
            RunState::Paused => {
                self.state = RunState::Running;
                self.last_frame = self.clock.now();
                log::info!("Simulation resumed at {:.2}s", self.metrics.time_elapsed);
            }
        }
    }

    /// Stop, apply deferred parameters, regenerate the field, zero metrics.
    pub fn reset(&mut self) {
        self.state = RunState::Stopped;
        if let Some(pending) = self.pending_parameters.take() {
            self.parameters = pending;
        }
        self.regenerate();
        log::info!("Simulation reset");
    }

    /// Change the parameters.
    ///
    /// While stopped the field is regenerated immediately. During a run
    /// (paused or not) the new parameters are held until the next
    /// [`reset`](Self::reset).
    pub fn set_parameters(
        &mut self,
        parameters: SimParameters,
    ) -> Result<ParameterChange, ParameterError> {
        parameters.validate()?;
        if self.state != RunState::Stopped {
            log::debug!("Run in progress, deferring parameter change to next reset");
            self.pending_parameters = Some(parameters);
            return Ok(ParameterChange::Deferred);
        }
        self.parameters = parameters;
        self.pending_parameters = None;
        self.regenerate();
        Ok(ParameterChange::Applied)
    }

    /// Resize the field. Positions are recomputed around the new center
    /// right away; orbits are untouched.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        refresh_positions(&mut self.world, viewport.center());
    }

    /// Run one frame from the engine clock.
    ///
    /// Steps the simulation by the wall-clock time since the previous frame
    /// when running, and always advances removal effects. Returns the delta
    /// that was simulated (0.0 when stopped or paused).
    pub fn frame(&mut self) -> f64 {
        let mut delta = 0.0;
        if self.state == RunState::Running {
            let now = self.clock.now();
            delta = (now - self.last_frame).max(0.0);
            self.last_frame = now;
            self.advance(delta);
        }
        self.particles.tick();
        delta
    }

    /// Step the simulation by an explicit `delta_seconds`, bypassing the
    /// clock. Only acts while running; returns whether a step happened.
    pub fn step(&mut self, delta_seconds: f64) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.advance(delta_seconds);
        true
    }

    fn advance(&mut self, delta_seconds: f64) {
        self.metrics.time_elapsed += delta_seconds;

        orbit_system(&mut self.world, self.viewport.center(), delta_seconds);

        let events = recycler_system(
            &mut self.world,
            &self.layout.recyclers,
            &self.layout.debris,
            &mut self.metrics,
            delta_seconds,
        );
        for event in &events {
            self.particles.burst(event.position, &mut self.rng);
        }
        self.removals.extend(events);

        self.metrics
            .refresh_efficiency(self.layout.debris.len() as u32, self.parameters.energy_budget);
    }

    /// Replace the field with a fresh one for the current parameters.
    fn regenerate(&mut self) {
        self.world.clear();
        self.layout = generate_field(
            &mut self.world,
            &self.parameters,
            self.viewport.center(),
            &mut self.rng,
        );
        self.metrics = Metrics::default();
        self.removals.clear();
        self.particles.clear();
        log::info!(
            "Generated field: {} debris, {} recyclers at {:.0} km",
            self.layout.debris.len(),
            self.layout.recyclers.len(),
            self.parameters.orbit_height
        );
    }

    /// Hand over removals completed since the last call.
    pub fn drain_removal_events(&mut self) -> Vec<RemovalEvent> {
        std::mem::take(&mut self.removals)
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            debris: debris_views(&self.world, &self.layout),
            recyclers: recycler_views(&self.world, &self.layout),
            particles: self.particles.particles().to_vec(),
            metrics: self.metrics,
            parameters: self.parameters,
            pending_parameters: self.pending_parameters,
            running: self.is_running(),
            paused: self.is_paused(),
        }
    }

    /// Read access to the ECS world for custom renderers.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn parameters(&self) -> &SimParameters {
        &self.parameters
    }

    pub fn pending_parameters(&self) -> Option<&SimParameters> {
        self.pending_parameters.as_ref()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// True while a run is in progress, paused or not.
    pub fn is_running(&self) -> bool {
        self.state != RunState::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    /// Count all debris, removed or not
    pub fn debris_count(&self) -> usize {
        self.layout.debris.len()
    }

    /// Count debris marked removed
    pub fn removed_debris_count(&self) -> usize {
        self.world
            .query::<&Removal>()
            .iter()
            .filter(|(_, r)| r.removed)
            .count()
    }

    pub fn recycler_count(&self) -> usize {
        self.layout.recyclers.len()
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn engine(parameters: SimParameters) -> (SimulationEngine, ManualClock) {
        let clock = ManualClock::new();
        let config = EngineConfig {
            parameters,
            seed: Some(42),
            ..EngineConfig::default()
        };
        (SimulationEngine::with_clock(config, clock.clone()), clock)
    }

    #[test]
    fn test_engine_creation() {
        let (engine, _) = engine(SimParameters::default());
        assert_eq!(engine.debris_count(), 100);
        assert_eq!(engine.recycler_count(), 2);
        assert_eq!(engine.state(), RunState::Stopped);
        assert_eq!(*engine.metrics(), Metrics::default());
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut engine, clock) = engine(SimParameters::default());
        engine.start();
        clock.advance(1.0);
        engine.frame();
        engine.start();
        assert_eq!(engine.state(), RunState::Running);
        assert!((engine.metrics().time_elapsed - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_uses_clock_delta() {
        let (mut engine, clock) = engine(SimParameters::default());
        assert_eq!(engine.frame(), 0.0);

        engine.start();
        clock.advance(0.25);
        assert_eq!(engine.frame(), 0.25);
        clock.advance(0.5);
        assert_eq!(engine.frame(), 0.5);
        assert_eq!(engine.metrics().time_elapsed, 0.75);
    }

    #[test]
    fn test_pause_excludes_paused_interval() {
        let (mut engine, clock) = engine(SimParameters::default());
        engine.start();
        clock.advance(1.0);
        engine.frame();

        engine.toggle_pause();
        assert!(engine.is_paused());
        clock.advance(30.0);
        assert_eq!(engine.frame(), 0.0);
        assert_eq!(engine.metrics().time_elapsed, 1.0);

        engine.toggle_pause();
        clock.advance(0.5);
        assert_eq!(engine.frame(), 0.5);
        assert_eq!(engine.metrics().time_elapsed, 1.5);
    }

    #[test]
    fn test_toggle_pause_ignored_when_stopped() {
        let (mut engine, _) = engine(SimParameters::default());
        engine.toggle_pause();
        assert_eq!(engine.state(), RunState::Stopped);
    }

    #[test]
    fn test_step_only_while_running() {
        let (mut engine, _) = engine(SimParameters::default());
        assert!(!engine.step(1.0));
        engine.start();
        assert!(engine.step(1.0));
        engine.toggle_pause();
        assert!(!engine.step(1.0));
        assert_eq!(engine.metrics().time_elapsed, 1.0);
    }

    #[test]
    fn test_parameters_applied_when_stopped() {
        let (mut engine, _) = engine(SimParameters::default());
        let change = engine
            .set_parameters(SimParameters {
                debris_count: 150,
                energy_budget: 900.0,
                ..SimParameters::default()
            })
            .unwrap();
        assert_eq!(change, ParameterChange::Applied);
        assert_eq!(engine.debris_count(), 150);
        assert_eq!(engine.recycler_count(), 3);
        for view in engine.snapshot().recyclers {
            assert!((view.energy - 300.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_parameters_deferred_while_running() {
        let (mut engine, _) = engine(SimParameters::default());
        engine.start();
        engine.step(0.5);
        let change = engine
            .set_parameters(SimParameters {
                debris_count: 10,
                ..SimParameters::default()
            })
            .unwrap();
        assert_eq!(change, ParameterChange::Deferred);
        assert_eq!(engine.debris_count(), 100);
        assert_eq!(engine.pending_parameters().map(|p| p.debris_count), Some(10));
        assert_eq!(engine.metrics().time_elapsed, 0.5);

        engine.reset();
        assert_eq!(engine.debris_count(), 10);
        assert_eq!(engine.recycler_count(), 1);
        assert!(engine.pending_parameters().is_none());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let (mut engine, _) = engine(SimParameters::default());
        let err = engine.set_parameters(SimParameters {
            orbit_height: f64::INFINITY,
            ..SimParameters::default()
        });
        assert!(err.is_err());
        assert_eq!(engine.parameters().orbit_height, 400.0);
    }

    #[test]
    fn test_reset_zeroes_and_stops() {
        let (mut engine, _) = engine(SimParameters::default());
        engine.start();
        for _ in 0..40 {
            engine.step(0.25);
        }
        engine.reset();
        assert_eq!(engine.state(), RunState::Stopped);
        assert_eq!(*engine.metrics(), Metrics::default());
        assert_eq!(engine.removed_debris_count(), 0);
        assert!(engine.drain_removal_events().is_empty());
        assert!(engine.particles().is_empty());
    }

    #[test]
    fn test_empty_field_is_a_noop() {
        let (mut engine, _) = engine(SimParameters {
            debris_count: 0,
            ..SimParameters::default()
        });
        assert_eq!(engine.recycler_count(), 0);
        engine.start();
        engine.step(5.0);
        assert_eq!(engine.metrics().efficiency, 0);
        assert_eq!(engine.metrics().debris_removed, 0);
        assert_eq!(engine.metrics().time_elapsed, 5.0);
    }

    #[test]
    fn test_viewport_recenters_positions() {
        let (mut engine, _) = engine(SimParameters::default());
        let before = engine.snapshot().debris[0].position;
        engine.set_viewport(Viewport::new(1000.0, 800.0));
        let after = engine.snapshot().debris[0].position;
        assert!((after.x - before.x - 100.0).abs() < 1e-9);
        assert!((after.y - before.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_moves_removed_debris() {
        let (mut engine, _) = engine(SimParameters::default());
        let first = engine.layout().debris[0];
        engine.world.get::<&mut Removal>(first).unwrap().removed = true;
        let before = engine.snapshot().debris[0].position;

        engine.set_viewport(Viewport::new(1000.0, 800.0));
        let after = engine.snapshot().debris[0];
        assert!(after.removed);
        assert!((after.position.x - before.x - 100.0).abs() < 1e-9);
        assert!((after.position.y - before.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_flags() {
        let (mut engine, _) = engine(SimParameters::default());
        engine.start();
        engine.toggle_pause();
        let snap = engine.snapshot();
        assert!(snap.running);
        assert!(snap.paused);
        assert_eq!(snap.debris.len(), 100);
        assert_eq!(snap.parameters, SimParameters::default());
    }
}
