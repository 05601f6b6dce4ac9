//! Deterministic simulation-level RNG wrapper.
//!
//! The steering core never draws random numbers; `SimRng` exists for the
//! host-side spawn adapters that scatter agents before the first tick.  The
//! same seed always produces the same initial population.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::DVec3;

/// Seeded RNG for global, single-threaded operations (initial placement).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniformly distributed direction on the unit sphere.
    pub fn unit_vector(&mut self) -> DVec3 {
        let z: f64 = self.0.gen_range(-1.0..=1.0);
        let phi: f64 = self.0.gen_range(0.0..TAU);
        let r = (1.0 - z * z).max(0.0).sqrt();
        DVec3::new(r * phi.cos(), r * phi.sin(), z)
    }

    /// Point uniformly distributed inside the ball of `radius` around the
    /// origin (uniform by volume, not by radius).
    pub fn point_in_sphere(&mut self, radius: f64) -> DVec3 {
        let u: f64 = self.0.r#gen();
        self.unit_vector() * (radius * u.cbrt())
    }
}
