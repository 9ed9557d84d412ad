//! ORLP Headless Simulation Harness
//!
//! Runs the scenario presets through the engine and checks its invariants.
//! Runs entirely in-process — no renderer, no wall clock.
//!
//! Usage:
//!   cargo run -p orlp-simtest
//!   cargo run -p orlp-simtest -- --verbose
//!   cargo run -p orlp-simtest -- --scenario leo_cleanup --json

mod scenario;

use std::collections::HashSet;

use clap::Parser;
use hecs::World;
use orlp_core::prelude::*;
use orlp_core::systems::{orbit_system, recycler_system};
use orlp_logic::fleet::{energy_share, recycler_count};
use orlp_logic::forecast::forecast;
use orlp_logic::geometry::Vec2;
use orlp_logic::metrics::efficiency;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scenario::{parse_scenarios, Scenario};

// ── Scenario presets (bundled at build time) ────────────────────────────
const SCENARIOS_JSON: &str = include_str!("../../../data/scenarios.json");

#[derive(Debug, Parser)]
#[command(name = "orlp-simtest", about = "Headless ORLP simulation harness")]
struct Args {
    /// Print every check, not only failures, and engine logs at info level
    #[arg(short, long)]
    verbose: bool,

    /// Run only the named scenario
    #[arg(short, long)]
    scenario: Option<String>,

    /// Seed for field generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the final snapshot of each scenario as JSON
    #[arg(long)]
    json: bool,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args = Args::parse();

    // Engine logs go through the `log` facade; init() bridges them in.
    // RUST_LOG overrides the level picked by --verbose.
    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("=== ORLP Simulation Harness ===\n");

    let scenarios = match parse_scenarios(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to load scenarios: {}", e);
            std::process::exit(2);
        }
    };
    let selected: Vec<&Scenario> = scenarios
        .iter()
        .filter(|s| args.scenario.as_ref().map_or(true, |name| &s.name == name))
        .collect();
    if selected.is_empty() {
        eprintln!("no scenario matches {:?}", args.scenario);
        std::process::exit(2);
    }

    let mut results = Vec::new();

    // 1. Fleet sizing sweep
    results.extend(validate_fleet_sizing(args.verbose));

    // 2. Efficiency bounds
    results.extend(validate_efficiency_bounds(args.verbose));

    // 3. Continuous-coverage reference run
    results.extend(validate_continuous_coverage(args.verbose));

    // 4. Pause / resume timing
    results.extend(validate_pause_timing(args.seed));

    // 5. Scenario runs
    for s in &selected {
        results.extend(run_scenario(s, args.seed, args.verbose, args.json));
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Fleet Sizing ─────────────────────────────────────────────────────

fn validate_fleet_sizing(verbose: bool) -> Vec<TestResult> {
    println!("--- Fleet Sizing ---");
    let mut results = Vec::new();

    let mut engine = SimulationEngine::with_clock(
        EngineConfig {
            seed: Some(0),
            ..EngineConfig::default()
        },
        ManualClock::new(),
    );

    for &(debris_count, expected) in &[(150u32, 3usize), (10, 1), (0, 0), (51, 2)] {
        let budget = 600.0;
        let applied = engine.set_parameters(SimParameters {
            debris_count,
            energy_budget: budget,
            ..SimParameters::default()
        });
        let snap = engine.snapshot();
        let share = energy_share(budget, expected as u32);
        let equal_shares = snap
            .recyclers
            .iter()
            .all(|r| (r.energy - share).abs() < 1e-9);
        results.push(TestResult {
            name: format!("fleet_{}_debris", debris_count),
            passed: applied.is_ok() && snap.recyclers.len() == expected && equal_shares,
            detail: format!(
                "{} recyclers (expected {}), {:.1} energy each",
                snap.recyclers.len(),
                expected,
                share
            ),
        });
    }

    // Full sweep against the closed form
    let mismatches: Vec<u32> = (0..=400)
        .filter(|&n| recycler_count(n) != (n as f64 / 50.0).ceil().min(3.0) as u32)
        .collect();
    results.push(TestResult {
        name: "fleet_sweep_0_400".into(),
        passed: mismatches.is_empty(),
        detail: format!("{} mismatches against min(3, ceil(n/50))", mismatches.len()),
    });

    if verbose {
        for n in [1u32, 50, 51, 100, 101, 150, 300] {
            println!("    {:4} debris → {} recyclers", n, recycler_count(n));
        }
    }

    results
}

// ── 2. Efficiency Bounds ────────────────────────────────────────────────

fn validate_efficiency_bounds(verbose: bool) -> Vec<TestResult> {
    println!("--- Efficiency Bounds ---");
    let mut results = Vec::new();

    let mut checked = 0;
    let mut out_of_range = 0;
    for total in [1u32, 10, 50, 100, 300] {
        for removed in 0..=total {
            for used in [0.0, 1.0, 50.0, 500.0, 10_000.0] {
                for budget in [0.0, 100.0, 500.0, 1000.0] {
                    checked += 1;
                    if efficiency(total, removed, used, budget) > 100 {
                        out_of_range += 1;
                    }
                }
            }
        }
    }
    results.push(TestResult {
        name: "efficiency_in_range".into(),
        passed: out_of_range == 0,
        detail: format!("{}/{} combinations within 0-100", checked - out_of_range, checked),
    });

    results.push(TestResult {
        name: "efficiency_empty_field".into(),
        passed: efficiency(0, 0, 0.0, 500.0) == 0,
        detail: "empty field scores 0".into(),
    });

    if verbose {
        for &(removed, used) in &[(0u32, 0.0), (5, 20.0), (25, 100.0), (50, 250.0), (100, 500.0)] {
            println!(
                "    {:3}/100 removed, {:5.1}/500 energy → {}%",
                removed,
                used,
                efficiency(100, removed, used, 500.0)
            );
        }
    }

    results
}

// ── 3. Continuous Coverage ──────────────────────────────────────────────

/// One stationary recycler with all 50 debris permanently inside its range,
/// stepped for 10 seconds.
fn validate_continuous_coverage(verbose: bool) -> Vec<TestResult> {
    println!("--- Continuous Coverage ---");
    let mut results = Vec::new();

    let mut world = World::new();
    let center = Vec2::new(400.0, 300.0);
    let debris: Vec<_> = (0..50u32)
        .map(|i| {
            let orbit = Orbit::new(i as f64 * 0.125, 5.0 + (i % 24) as f64, 0.02);
            world.spawn((
                Debris {
                    id: i,
                    size: 6.0,
                    color: DebrisColor::Grey,
                },
                Position(orbit.point(center)),
                orbit,
                Removal::default(),
            ))
        })
        .collect();
    let recycler = world.spawn((
        Recycler::new(0, 500.0, 30.0),
        Orbit::new(0.0, 0.0, 0.15),
        Position(center),
    ));

    let mut metrics = Metrics::default();
    let dt = 0.25;
    for _ in 0..40 {
        orbit_system(&mut world, center, dt);
        recycler_system(&mut world, &[recycler], &debris, &mut metrics, dt);
        metrics.time_elapsed += dt;
        metrics.refresh_efficiency(50, 500.0);
    }

    results.push(TestResult {
        name: "coverage_energy_used".into(),
        passed: (metrics.energy_used - 20.0).abs() < 1e-6,
        detail: format!("{:.2} energy used over 10s (expected 20)", metrics.energy_used),
    });
    results.push(TestResult {
        name: "coverage_debris_removed".into(),
        passed: metrics.debris_removed == 5,
        detail: format!("{} removed over 10s (expected 5)", metrics.debris_removed),
    });

    if verbose {
        println!(
            "  efficiency after 10s: {}% ({} removed, {:.1} energy)",
            metrics.efficiency, metrics.debris_removed, metrics.energy_used
        );
    }

    results
}

// ── 4. Pause / Resume ───────────────────────────────────────────────────

fn validate_pause_timing(seed: u64) -> Vec<TestResult> {
    println!("--- Pause / Resume ---");
    let mut results = Vec::new();

    let clock = ManualClock::new();
    let mut engine = SimulationEngine::with_clock(
        EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        },
        clock.clone(),
    );

    engine.start();
    for _ in 0..4 {
        clock.advance(0.25);
        engine.frame();
    }
    engine.toggle_pause();
    clock.advance(60.0);
    engine.frame();
    let paused_elapsed = engine.metrics().time_elapsed;
    engine.toggle_pause();
    clock.advance(0.25);
    let resumed_delta = engine.frame();

    results.push(TestResult {
        name: "pause_freezes_time".into(),
        passed: (paused_elapsed - 1.0).abs() < 1e-9,
        detail: format!("{:.3}s elapsed after 1s run + 60s pause", paused_elapsed),
    });
    results.push(TestResult {
        name: "resume_reanchors_clock".into(),
        passed: (resumed_delta - 0.25).abs() < 1e-9,
        detail: format!("first frame after resume stepped {:.3}s", resumed_delta),
    });

    engine.start();
    results.push(TestResult {
        name: "start_idempotent".into(),
        passed: engine.state() == RunState::Running,
        detail: "start while running keeps the run".into(),
    });

    results
}

// ── 5. Scenario Runs ────────────────────────────────────────────────────

fn run_scenario(s: &Scenario, seed: u64, verbose: bool, json: bool) -> Vec<TestResult> {
    println!("--- Scenario: {} ---", s.name);
    if verbose && !s.description.is_empty() {
        println!("  {}", s.description);
    }
    let mut results = Vec::new();

    let clock = ManualClock::new();
    let mut engine = SimulationEngine::with_clock(
        EngineConfig {
            parameters: s.parameters,
            seed: Some(seed),
            ..EngineConfig::default()
        },
        clock.clone(),
    );

    let expected_recyclers = recycler_count(s.parameters.debris_count) as usize;
    results.push(TestResult {
        name: format!("{}_fleet", s.name),
        passed: engine.recycler_count() == expected_recyclers,
        detail: format!("{} recyclers", engine.recycler_count()),
    });

    let mut counter_mismatch = 0usize;
    let mut regressions = 0usize;
    let mut out_of_range = 0usize;
    let mut shared = 0usize;
    let mut bad_efficiency = 0usize;
    let mut event_count = 0usize;
    let mut previous: Vec<(bool, f64)> = removal_times(&engine);

    engine.start();
    for _ in 0..s.frame_count() {
        clock.advance(s.frame_seconds);
        engine.frame();
        event_count += engine.drain_removal_events().len();

        if engine.metrics().debris_removed as usize != engine.removed_debris_count() {
            counter_mismatch += 1;
        }
        if engine.metrics().efficiency > 100 {
            bad_efficiency += 1;
        }

        let current = removal_times(&engine);
        for ((was_removed, before), (_, after)) in previous.iter().zip(current.iter()) {
            if after < before || (*was_removed && after != before) {
                regressions += 1;
            }
        }
        previous = current;

        let snap = engine.snapshot();
        let mut held = HashSet::new();
        for r in &snap.recyclers {
            if let (Some(id), Some(at)) = (r.target, r.target_position) {
                if r.position.distance(&at) > r.range + 1e-9 {
                    out_of_range += 1;
                }
                if !held.insert(id) {
                    shared += 1;
                }
            }
        }
    }

    let m = *engine.metrics();
    results.push(TestResult {
        name: format!("{}_removed_counter", s.name),
        passed: counter_mismatch == 0 && event_count == m.debris_removed as usize,
        detail: format!(
            "{} removed, {} events, {} frame mismatches",
            m.debris_removed, event_count, counter_mismatch
        ),
    });
    results.push(TestResult {
        name: format!("{}_removal_time_monotonic", s.name),
        passed: regressions == 0,
        detail: format!("{} regressions", regressions),
    });
    results.push(TestResult {
        name: format!("{}_targets_in_range", s.name),
        passed: out_of_range == 0 && shared == 0,
        detail: format!("{} out of range, {} shared", out_of_range, shared),
    });
    results.push(TestResult {
        name: format!("{}_efficiency_bounds", s.name),
        passed: bad_efficiency == 0,
        detail: format!("final efficiency {}%", m.efficiency),
    });
    results.push(TestResult {
        name: format!("{}_time_elapsed", s.name),
        passed: (m.time_elapsed - s.frame_count() as f64 * s.frame_seconds).abs() < 1e-6,
        detail: format!("{:.2}s simulated", m.time_elapsed),
    });

    let f = forecast(&s.parameters);
    results.push(TestResult {
        name: format!("{}_forecast_band", s.name),
        passed: (60..=95).contains(&f.predicted_efficiency),
        detail: format!(
            "forecast {}% vs actual {}%",
            f.predicted_efficiency, m.efficiency
        ),
    });

    if verbose {
        println!(
            "  {:.0}s: {}/{} removed, {:.1} energy used, efficiency {}%",
            m.time_elapsed,
            m.debris_removed,
            engine.debris_count(),
            m.energy_used,
            m.efficiency
        );
        for finding in &f.findings {
            println!("    [{:?}] {}", finding.severity(), finding.message());
        }
    }

    if json {
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("snapshot serialization failed: {}", e),
        }
    }

    results
}

fn removal_times(engine: &SimulationEngine) -> Vec<(bool, f64)> {
    engine
        .layout()
        .debris
        .iter()
        .filter_map(|&e| {
            engine
                .world()
                .get::<&Removal>(e)
                .ok()
                .map(|r| (r.removed, r.removal_time))
        })
        .collect()
}
