//! Fluent builder for constructing `AgentBuffers`.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::AgentBuffersBuilder;
//! use flock_core::DVec3;
//!
//! let agents = AgentBuffersBuilder::new(3)
//!     .place_with(|agent| DVec3::new(agent.0 as f64 * 10.0, 0.0, 0.0))
//!     .build();
//!
//! assert_eq!(agents.count, 3);
//! assert_eq!(agents.directions[0], DVec3::X);
//! ```

use flock_core::math::direction_of;
use flock_core::{AgentId, DQuat, DVec3, SimRng};

use crate::AgentBuffers;

/// Fluent builder for [`AgentBuffers`].
///
/// All arrays are pre-allocated at construction time: every agent starts at
/// the origin heading along `+X`.  Initial state is then supplied per agent
/// by the host, either explicitly or via the
/// [`scatter_in_sphere`](Self::scatter_in_sphere) spawn adapter.
pub struct AgentBuffersBuilder {
    positions: Vec<DVec3>,
    directions: Vec<DVec3>,
}

impl AgentBuffersBuilder {
    /// Create a builder for `count` agents.
    pub fn new(count: usize) -> Self {
        Self {
            positions: vec![DVec3::ZERO; count],
            directions: vec![DVec3::X; count],
        }
    }

    /// Set every agent's starting position from `f(agent)`.
    pub fn place_with(mut self, mut f: impl FnMut(AgentId) -> DVec3) -> Self {
        for (i, p) in self.positions.iter_mut().enumerate() {
            *p = f(AgentId::from_index(i));
        }
        self
    }

    /// Set every agent's starting heading from `f(agent)`.
    pub fn head_with(mut self, mut f: impl FnMut(AgentId) -> DVec3) -> Self {
        for (i, d) in self.directions.iter_mut().enumerate() {
            *d = f(AgentId::from_index(i));
        }
        self
    }

    /// Set every agent's starting heading from an orientation: the heading is
    /// the orientation's local `+X` axis.
    pub fn orient_with(self, mut f: impl FnMut(AgentId) -> DQuat) -> Self {
        self.head_with(|agent| direction_of(f(agent)))
    }

    /// Spawn adapter: positions uniform by volume inside the sphere of
    /// `radius` around the origin, headings uniform on the unit sphere.
    ///
    /// Deterministic for a given `seed`.
    pub fn scatter_in_sphere(mut self, radius: f64, seed: u64) -> Self {
        let mut rng = SimRng::new(seed);
        for (p, d) in self.positions.iter_mut().zip(self.directions.iter_mut()) {
            *p = rng.point_in_sphere(radius);
            *d = rng.unit_vector();
        }
        self
    }

    /// Construct the `AgentBuffers`, normalising every heading.
    pub fn build(self) -> AgentBuffers {
        AgentBuffers::from_vecs(self.positions, self.directions)
    }
}
