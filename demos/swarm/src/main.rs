//! swarm — runnable flock demo.
//!
//! Scatters agents through the inner half of the bounding sphere with random
//! headings, runs the classic flocking model for `total_ticks` ticks and
//! writes placements and tick summaries as CSV.
//!
//! ```text
//! swarm [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! `CONFIG.json` is a (possibly partial) `FlockConfig`; missing fields take
//! their defaults.  Pass `-` to keep the built-in config while choosing an
//! output directory.  Log verbosity follows `RUST_LOG` (default `info`).

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use flock_agent::AgentBuffersBuilder;
use flock_behavior::ClassicFlocking;
use flock_core::{ExecutionMode, FlockConfig, Tick};
use flock_output::{CsvWriter, OutputWriter, SimOutputObserver};
use flock_sim::{Placement, SimBuilder, SimObserver, TickStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_AGENT_COUNT:      usize = 2_000;
const DEFAULT_OUTPUT_DIR:       &str  = "output";
const SPAWN_RADIUS_FRACTION:    f64   = 0.5;
const PLACEMENT_INTERVAL_TICKS: u64   = 10;
const PROGRESS_INTERVAL_TICKS:  u64   = 100;

// ── Observer wrapper: row counts and progress logging ─────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:          SimOutputObserver<W>,
    placement_rows: usize,
    summary_rows:   usize,
    relocations:    usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, placement_rows: 0, summary_rows: 0, relocations: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_placements(&mut self, tick: Tick, placements: &[Placement]) {
        if tick.0.is_multiple_of(PLACEMENT_INTERVAL_TICKS) {
            self.placement_rows += placements.len();
        }
        self.inner.on_placements(tick, placements);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.summary_rows += 1;
        self.relocations += stats.relocations;
        if tick.0.is_multiple_of(PROGRESS_INTERVAL_TICKS) {
            info!(
                tick = tick.0,
                elapsed_secs = stats.elapsed_secs,
                relocations = stats.relocations,
                relevant_neighbors = stats.relevant_neighbors,
                "progress"
            );
        }
        self.inner.on_tick_end(tick, stats);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(arg: Option<&str>) -> Result<FlockConfig> {
    match arg {
        None | Some("-") => Ok(FlockConfig {
            agent_count: DEFAULT_AGENT_COUNT,
            execution:   ExecutionMode::Parallel,
            ..FlockConfig::default()
        }),
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {path}"))
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let out_dir: PathBuf = args.get(1).map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    info!(
        agents = config.agent_count,
        ticks = config.total_ticks,
        execution = ?config.execution,
        seed = config.seed,
        "starting swarm"
    );

    // 1. Spawn agents.
    let agents = AgentBuffersBuilder::new(config.agent_count)
        .scatter_in_sphere(config.bounds_radius * SPAWN_RADIUS_FRACTION, config.seed)
        .build();

    // 2. Build sim.
    let mut sim = SimBuilder::new(config, agents, ClassicFlocking)
        .build()
        .context("building simulation")?;

    // 3. Set up output.
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer, PLACEMENT_INTERVAL_TICKS));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let wall = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        return Err(e).context("writing simulation output");
    }

    // 5. Summary.
    let max_radius = sim.agents.positions.iter().map(|p| p.length()).fold(0.0, f64::max);
    info!(
        wall_secs = wall.as_secs_f64(),
        sim_secs = sim.clock.elapsed_secs,
        relocations = obs.relocations,
        max_radius,
        "simulation complete"
    );
    println!("  agent_placements.csv : {} rows", obs.placement_rows);
    println!("  tick_summaries.csv   : {} rows", obs.summary_rows);
    println!("  written to           : {}", out_dir.display());

    Ok(())
}
