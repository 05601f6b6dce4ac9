//! The `Sim` struct and its tick loop.

use flock_agent::{AgentBuffers, TickSnapshot};
use flock_behavior::{SteerContext, SteeringModel, SteeringParams, gather_relevant};
use flock_core::math::orientation_of;
use flock_core::{AgentId, DVec3, ExecutionMode, FlockConfig, SimClock, Tick};
use flock_spatial::SpatialGrid;
use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

use crate::{Placement, SimError, SimObserver, SimResult, TickStats};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` owns every agent, the spatial grid and the steering model, and
/// drives the three-phase tick described in the [crate docs](crate).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: SteeringModel> {
    /// Global configuration.  Movement speed, rule strengths, execution mode
    /// and batch size are re-read every tick; the grid geometry and worker
    /// pool are fixed at build time.
    pub config: FlockConfig,

    /// Current tick and simulated seconds elapsed.
    pub clock: SimClock,

    /// Authoritative positions and headings (SoA).
    pub agents: AgentBuffers,

    /// Cell membership for every agent.  Kept consistent with
    /// `agents.positions` between ticks.
    pub grid: SpatialGrid,

    /// The steering model.  Called once per agent per tick.
    pub steering: S,

    pub(crate) snapshot:   TickSnapshot,
    pub(crate) placements: Vec<Placement>,

    /// Dedicated worker pool when `config.num_threads` is set.
    pub(crate) pool: Option<ThreadPool>,
}

impl<S: SteeringModel> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.total_ticks`, stepping by
    /// `config.tick_seconds`.
    ///
    /// Calls observer hooks at every tick boundary and `on_sim_end` once at
    /// the end.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = Tick(self.config.total_ticks);
        while self.clock.current_tick < end {
            self.step(self.config.tick_seconds, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks of `delta_secs` each (ignores `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(
        &mut self,
        n:          u64,
        delta_secs: f64,
        observer:   &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            self.step(delta_secs, observer)?;
        }
        Ok(())
    }

    /// Advance every agent by one tick of `delta_secs` simulated seconds.
    ///
    /// `config` is re-validated first, so a bad retune between ticks is
    /// reported here and leaves agents, grid and clock untouched.
    pub fn step<O: SimObserver>(&mut self, delta_secs: f64, observer: &mut O) -> SimResult<TickStats> {
        if !(delta_secs.is_finite() && delta_secs >= 0.0) {
            return Err(SimError::Config(format!(
                "tick length must be a finite non-negative number of seconds, got {delta_secs}"
            )));
        }
        self.check_config()?;

        let now = self.clock.current_tick;
        let _span = debug_span!("tick", tick = now.0).entered();
        observer.on_tick_start(now);

        // Explicit field borrows so the pool closure sees disjoint access.
        let Self { config, agents, grid, steering, snapshot, placements, pool, .. } = self;
        let mut phases = || run_phases(config, agents, grid, &*steering, snapshot, placements, delta_secs);
        let (relocations, relevant_neighbors) = match pool {
            Some(pool) => pool.install(phases),
            None       => phases(),
        };

        #[cfg(debug_assertions)]
        self.grid.verify(&self.agents.positions)?;

        let stats = TickStats {
            agents: self.agents.count,
            relocations,
            relevant_neighbors,
            elapsed_secs: self.clock.elapsed_secs + delta_secs,
        };
        debug!(relocations, relevant_neighbors, "tick complete");

        observer.on_placements(now, &self.placements);
        observer.on_tick_end(now, &stats);
        self.clock.advance(delta_secs);
        Ok(stats)
    }

    /// Placements emitted by the most recent tick, indexed by `AgentId`.
    /// Empty before the first tick.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of Rayon workers parallel phases run on.
    pub fn worker_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_config(&self) -> SimResult<()> {
        self.config.validate()?;
        SteeringParams::from(&self.config).validate()?;
        if self.config.agent_count != self.agents.count {
            return Err(SimError::AgentCountMismatch {
                expected: self.agents.count,
                got:      self.config.agent_count,
                what:     "configured agent_count",
            });
        }
        Ok(())
    }
}

// ── Tick phases ───────────────────────────────────────────────────────────────

/// Snapshot, compute and apply for every agent.  Returns
/// `(relocations, relevant_neighbors)`.
fn run_phases<S: SteeringModel>(
    config:     &FlockConfig,
    agents:     &mut AgentBuffers,
    grid:       &SpatialGrid,
    steering:   &S,
    snapshot:   &mut TickSnapshot,
    placements: &mut Vec<Placement>,
    delta_secs: f64,
) -> (usize, usize) {
    let parallel = config.execution == ExecutionMode::Parallel;
    let batch = config.batch_size.max(1);

    // ── Phase 1: snapshot ─────────────────────────────────────────────────
    trace!("snapshot");
    if parallel {
        snapshot.resize_for(agents);
        snapshot.positions
            .par_iter_mut()
            .zip(snapshot.directions.par_iter_mut())
            .zip(agents.positions.par_iter().zip(agents.directions.par_iter()))
            .with_min_len(batch)
            .for_each(|((p, d), (&src_p, &src_d))| {
                *p = src_p;
                *d = src_d;
            });
    } else {
        snapshot.capture(agents);
    }

    // ── Phase 2: compute headings ─────────────────────────────────────────
    //
    // Reads only the snapshot; each agent writes its own heading slot.
    trace!("compute");
    let ctx = SteerContext::from_snapshot(snapshot, SteeringParams::from(config));
    let relevant_neighbors = if parallel {
        agents.directions
            .par_iter_mut()
            .enumerate()
            .with_min_len(batch)
            .map_init(Vec::new, |scratch, (i, heading)| {
                steer_agent(agent_id(i), heading, grid, steering, &ctx, scratch)
            })
            .sum::<usize>()
    } else {
        let mut scratch = Vec::new();
        agents.directions
            .iter_mut()
            .enumerate()
            .map(|(i, heading)| steer_agent(agent_id(i), heading, grid, steering, &ctx, &mut scratch))
            .sum::<usize>()
    };

    // ── Phase 3: apply movement ───────────────────────────────────────────
    trace!("apply");
    let step = config.movement_speed * delta_secs;
    placements.resize(agents.count, Placement::default());
    let relocations = if parallel {
        agents.positions
            .par_iter_mut()
            .zip(agents.directions.par_iter())
            .zip(placements.par_iter_mut())
            .enumerate()
            .with_min_len(batch)
            .map(|(i, ((position, &heading), placement))| {
                move_agent(agent_id(i), position, heading, step, placement, grid)
            })
            .filter(|&moved| moved)
            .count()
    } else {
        agents.positions
            .iter_mut()
            .zip(&agents.directions)
            .zip(placements.iter_mut())
            .enumerate()
            .map(|(i, ((position, &heading), placement))| {
                move_agent(agent_id(i), position, heading, step, placement, grid)
            })
            .filter(|&moved| moved)
            .count()
    };

    (relocations, relevant_neighbors)
}

/// Buffer index to id.  The builder guarantees the count fits in `u32`.
#[inline]
fn agent_id(index: usize) -> AgentId {
    AgentId::from_index(index)
}

/// Compute phase for one agent.  Returns the relevant-neighbour count.
fn steer_agent<S: SteeringModel>(
    agent:    AgentId,
    heading:  &mut DVec3,
    grid:     &SpatialGrid,
    steering: &S,
    ctx:      &SteerContext<'_>,
    scratch:  &mut Vec<AgentId>,
) -> usize {
    gather_relevant(agent, grid, ctx, scratch);
    *heading = steering.steer(agent, scratch, ctx);
    scratch.len()
}

/// Apply phase for one agent.  Returns `true` if it changed grid cell.
fn move_agent(
    agent:     AgentId,
    position:  &mut DVec3,
    heading:   DVec3,
    step:      f64,
    placement: &mut Placement,
    grid:      &SpatialGrid,
) -> bool {
    let old = *position;
    let new = old + heading * step;
    *position = new;
    *placement = Placement { position: new, orientation: orientation_of(heading) };
    grid.relocate(agent, old, new)
}
