//! Authoritative per-agent state: `AgentBuffers`.

use flock_core::{AgentId, DVec3};

/// Structure-of-Arrays storage for every agent's position and heading.
///
/// Both `Vec` fields have exactly `count` elements; the `AgentId` value is the
/// index into them:
///
/// ```ignore
/// let pos = agents.positions[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Headings are unit vectors.  The constructor normalises its input and the
/// scheduler keeps them normalised after every tick.
#[derive(Clone, Debug)]
pub struct AgentBuffers {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// World-space position of each agent.
    pub positions: Vec<DVec3>,

    /// Unit heading of each agent.
    pub directions: Vec<DVec3>,
}

impl AgentBuffers {
    /// Build from parallel position and heading vectors.
    ///
    /// Headings are normalised; a zero or non-finite heading becomes `+X`.
    ///
    /// # Panics
    /// Panics if the two vectors differ in length.
    pub fn from_vecs(positions: Vec<DVec3>, mut directions: Vec<DVec3>) -> Self {
        assert_eq!(
            positions.len(),
            directions.len(),
            "position and direction buffers must have one entry per agent"
        );
        for d in &mut directions {
            *d = d.try_normalize().unwrap_or(DVec3::X);
        }
        Self { count: positions.len(), positions, directions }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> DVec3 {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn direction(&self, agent: AgentId) -> DVec3 {
        self.directions[agent.index()]
    }
}
