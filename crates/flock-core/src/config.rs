//! Simulation configuration.
//!
//! `FlockConfig` carries every tunable the core reads.  Fields fall in two
//! groups:
//!
//! - **build-time**: `agent_count`, `bounds_radius`, `cell_size`,
//!   `num_threads`.  Read once by the simulation builder; changing them on a
//!   running simulation has no effect on the grid or thread pool.
//! - **per-tick**: everything else.  Read at the start of every tick, so a
//!   host may retune strengths, speed or execution mode between ticks.
//!
//! Typically loaded from a JSON/TOML file by the application crate (with the
//! `serde` feature) and passed to the simulation builder.

use crate::{FlockError, FlockResult};

/// How the per-agent work of each tick phase is executed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExecutionMode {
    /// Single-threaded, ascending `AgentId` order.  Deterministic.
    #[default]
    Serial,
    /// Fan out over a Rayon pool, one task batch per `batch_size` agents.
    Parallel,
}

/// Second rotation applied when steering an agent back from the boundary.
///
/// The tangential heading (the agent's heading with its radial component
/// removed) is tilted inward about the agent's right axis by this angle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundaryTurn {
    /// Tilt 45° inward: agents curve along the boundary while drifting back in.
    #[default]
    Tangential,
    /// Tilt 90° inward: agents head straight for the centre.
    Radial,
}

impl BoundaryTurn {
    /// Rotation angle (radians) about the right axis.
    #[inline]
    pub fn angle(self) -> f64 {
        match self {
            BoundaryTurn::Tangential => -std::f64::consts::FRAC_PI_4,
            BoundaryTurn::Radial     => -std::f64::consts::FRAC_PI_2,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Number of agents.  Fixed for the lifetime of the simulation.
    pub agent_count: usize,

    /// Radius of the bounding sphere, centred on the origin.
    pub bounds_radius: f64,

    /// Edge length of one cubic grid cell.
    pub cell_size: f64,

    /// Distance travelled per simulated second.
    pub movement_speed: f64,

    /// Neighbour search radius; also the width of the boundary steering band.
    pub search_radius: f64,

    pub cohesion_strength: f64,
    pub avoidance_strength: f64,
    pub alignment_strength: f64,

    /// Shape of the boundary return turn.
    pub boundary_turn: BoundaryTurn,

    /// Serial or parallel per-agent execution.
    pub execution: ExecutionMode,

    /// Minimum number of agents per parallel task.
    pub batch_size: usize,

    /// Worker thread count for a dedicated Rayon pool.  `None` uses the
    /// global pool (all logical cores).
    pub num_threads: Option<usize>,

    /// Master seed for host-side spawn adapters.
    pub seed: u64,

    /// Elapsed seconds per tick used by `Sim::run`.
    pub tick_seconds: f64,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            agent_count:        100,
            bounds_radius:      1000.0,
            cell_size:          125.0,
            movement_speed:     10.0,
            search_radius:      25.0,
            cohesion_strength:  0.75,
            avoidance_strength: 0.75,
            alignment_strength: 0.75,
            boundary_turn:      BoundaryTurn::default(),
            execution:          ExecutionMode::default(),
            batch_size:         64,
            num_threads:        None,
            seed:               42,
            tick_seconds:       1.0 / 60.0,
            total_ticks:        600,
        }
    }
}

impl FlockConfig {
    /// Check every field for values the core cannot run with.
    pub fn validate(&self) -> FlockResult<()> {
        if self.agent_count == 0 {
            return Err(FlockError::Config("agent_count must be positive".into()));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(FlockError::Config(format!(
                "agent_count {} exceeds the AgentId range", self.agent_count
            )));
        }
        positive("bounds_radius", self.bounds_radius)?;
        positive("cell_size", self.cell_size)?;
        positive("search_radius", self.search_radius)?;
        positive("tick_seconds", self.tick_seconds)?;
        non_negative("movement_speed", self.movement_speed)?;
        non_negative("cohesion_strength", self.cohesion_strength)?;
        non_negative("avoidance_strength", self.avoidance_strength)?;
        non_negative("alignment_strength", self.alignment_strength)?;
        if self.search_radius >= self.bounds_radius {
            return Err(FlockError::Config(format!(
                "search_radius {} must be smaller than bounds_radius {}",
                self.search_radius, self.bounds_radius
            )));
        }
        if self.batch_size == 0 {
            return Err(FlockError::Config("batch_size must be positive".into()));
        }
        if self.num_threads == Some(0) {
            return Err(FlockError::Config("num_threads must be positive when set".into()));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> FlockResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FlockError::Config(format!("{name} must be positive and finite, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> FlockResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FlockError::Config(format!("{name} must be non-negative and finite, got {value}")))
    }
}
