//! Double-precision vector helpers shared by the grid, the steering rules and
//! the scheduler.
//!
//! Positions and headings are `glam::DVec3` (f64).  Headings are unit vectors
//! in world space; an agent's local forward axis is `+X`.

pub use glam::{DQuat, DVec3, IVec3};

/// Squared-length threshold below which a displacement is treated as
/// coincident; also the slack on the boundary band.
pub const KINDA_SMALL: f64 = 1.0e-4;

/// Squared-length threshold below which a vector cannot be normalised.
pub const SMALL_NUMBER: f64 = 1.0e-8;

/// `v` scaled to unit length, or `None` if `v` is too short (or not finite)
/// to have a meaningful direction.
#[inline]
pub fn safe_normal(v: DVec3) -> Option<DVec3> {
    let len_sq = v.length_squared();
    if len_sq > SMALL_NUMBER && len_sq.is_finite() {
        Some(v / len_sq.sqrt())
    } else {
        None
    }
}

/// Blend unit vector `a` toward unit vector `b` by scaling the angle of the
/// shortest rotation between them.
///
/// `alpha = 0` returns `a`, `alpha = 1` returns `b`.  Values outside `[0, 1]`
/// under- or overshoot along the same arc.  Equal inputs return `a`; opposite
/// inputs rotate about an arbitrary axis orthogonal to `a`.  The result keeps
/// unit length without passing through an unnormalised intermediate.
pub fn lerp_normals(a: DVec3, b: DVec3, alpha: f64) -> DVec3 {
    let (axis, angle) = DQuat::from_rotation_arc(a, b).to_axis_angle();
    DQuat::from_axis_angle(axis, angle * alpha) * a
}

/// Rotate `v` by `angle` radians about the unit `axis` (right-handed).
#[inline]
pub fn rotate_about_axis(v: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    DQuat::from_axis_angle(axis, angle) * v
}

/// Rotation taking the local forward axis (`+X`) onto `direction` using yaw
/// and pitch only, with no roll.
///
/// A zero `direction` yields the identity rotation.
pub fn orientation_of(direction: DVec3) -> DQuat {
    let horizontal = direction.x.hypot(direction.y);
    let yaw = direction.y.atan2(direction.x);
    let pitch = direction.z.atan2(horizontal);
    DQuat::from_rotation_z(yaw) * DQuat::from_rotation_y(-pitch)
}

/// World-space heading of an orientation: its local `+X` axis.
#[inline]
pub fn direction_of(orientation: DQuat) -> DVec3 {
    orientation * DVec3::X
}

/// Map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]` without clamping.
#[inline]
pub fn map_range_unclamped(value: f64, (in_lo, in_hi): (f64, f64), (out_lo, out_hi): (f64, f64)) -> f64 {
    let t = (value - in_lo) / (in_hi - in_lo);
    out_lo + t * (out_hi - out_lo)
}

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// Axis-aligned box.  Bounds may be infinite (open faces).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Box of half extent `half` centred on `center`.
    #[inline]
    pub fn from_center(center: DVec3, half: f64) -> Self {
        Self { min: center - DVec3::splat(half), max: center + DVec3::splat(half) }
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// `true` if the sphere of squared radius `radius_sq` around `center`
    /// touches the box.
    #[inline]
    pub fn intersects_sphere(&self, center: DVec3, radius_sq: f64) -> bool {
        let closest = center.max(self.min).min(self.max);
        closest.distance_squared(center) <= radius_sq
    }
}
