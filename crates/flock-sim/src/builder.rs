//! Fluent builder for constructing a [`Sim`].

use flock_agent::{AgentBuffers, TickSnapshot};
use flock_behavior::{SteeringModel, SteeringParams};
use flock_core::{FlockConfig, SimClock};
use flock_spatial::{GridGeometry, SpatialGrid};
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`FlockConfig`] — agent count, bounds, rule strengths, execution mode, …
/// - [`AgentBuffers`] — from [`flock_agent::AgentBuffersBuilder`]
/// - `S: SteeringModel` — the steering implementation
///
/// # Example
///
/// ```rust,ignore
/// let agents = AgentBuffersBuilder::new(n).scatter_in_sphere(500.0, seed).build();
/// let mut sim = SimBuilder::new(config, agents, ClassicFlocking).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: SteeringModel> {
    config:   FlockConfig,
    agents:   AgentBuffers,
    steering: S,
}

impl<S: SteeringModel> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: FlockConfig, agents: AgentBuffers, steering: S) -> Self {
        Self { config, agents, steering }
    }

    /// Validate inputs, build the grid (with every agent inserted) and the
    /// optional worker pool, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        SteeringParams::from(&self.config).validate()?;

        let agent_count = self.agents.count;
        if agent_count != self.config.agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: self.config.agent_count,
                got:      agent_count,
                what:     "agent buffers",
            });
        }
        for (what, len) in [
            ("positions", self.agents.positions.len()),
            ("directions", self.agents.directions.len()),
        ] {
            if len != agent_count {
                return Err(SimError::AgentCountMismatch { expected: agent_count, got: len, what });
            }
        }
        if let Some(i) = self.agents.positions.iter().position(|p| !p.is_finite()) {
            return Err(SimError::Config(format!("agent {i} has a non-finite initial position")));
        }

        // ── Grid ──────────────────────────────────────────────────────────
        let geometry = GridGeometry::new(self.config.bounds_radius, self.config.cell_size)?;
        debug!(
            cell_size = geometry.cell_size(),
            dims = geometry.dims(),
            cells = geometry.cell_count(),
            execution = ?self.config.execution,
            "building flock grid"
        );
        let grid = SpatialGrid::new(geometry);
        grid.populate(&self.agents.positions);

        // ── Worker pool ───────────────────────────────────────────────────
        let pool = match self.config.num_threads {
            Some(n) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("flock-worker-{i}"))
                    .build()?,
            ),
            None => None,
        };

        Ok(Sim {
            clock:      SimClock::new(),
            snapshot:   TickSnapshot::with_count(agent_count),
            placements: Vec::with_capacity(agent_count),
            config:     self.config,
            agents:     self.agents,
            grid,
            steering:   self.steering,
            pool,
        })
    }
}
