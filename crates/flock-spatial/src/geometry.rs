//! Point ↔ cell mapping for a cubic grid centred on the origin.
//!
//! # Layout
//!
//! With cell size `C` and bounding radius `R`, the grid has
//! `h = ceil(R / C)` cells on each side of the origin, `dims = 2h` per axis
//! and `dims³` in total.  Along one axis a value `v` maps to
//!
//! ```text
//! clamp(floor(v / C + 0.5) + h, 0, dims - 1)
//! ```
//!
//! so cell `k` is centred on `(k - h) · C` and spans half a cell either side.
//! Cells are flattened as `x + y·dims + z·dims²`.
//!
//! # Clamped positions
//!
//! The rounding leaves a sliver of the bounding sphere (and anything beyond
//! it) outside the geometric boxes of the outermost cells; those positions
//! clamp into the edge cells.  [`GridGeometry::cell_bounds`] therefore opens
//! the outer faces of edge cells to infinity, which keeps containment checks
//! and sphere–box pruning exact for every position.

use flock_core::math::Aabb;
use flock_core::{CellId, DVec3, IVec3};

use crate::{SpatialError, SpatialResult};

/// Largest supported number of cells per axis (1024³ ≈ 1.07 B cells).
const MAX_DIMS: i64 = 1024;

/// Immutable description of the grid's extent and resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    cell_size: f64,
    half_dims: i32,
    dims: i32,
}

impl GridGeometry {
    /// Geometry covering a sphere of `bounds_radius` with cubic cells of
    /// `cell_size`.
    pub fn new(bounds_radius: f64, cell_size: f64) -> SpatialResult<Self> {
        if !(bounds_radius.is_finite() && bounds_radius > 0.0) {
            return Err(SpatialError::InvalidGeometry(format!(
                "bounds radius must be positive, got {bounds_radius}"
            )));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SpatialError::InvalidGeometry(format!(
                "cell size must be positive, got {cell_size}"
            )));
        }
        let half = (bounds_radius / cell_size).ceil();
        if half * 2.0 > MAX_DIMS as f64 {
            return Err(SpatialError::InvalidGeometry(format!(
                "{} cells per axis exceeds the limit of {MAX_DIMS}; use a larger cell size",
                half * 2.0
            )));
        }
        let half_dims = half as i32;
        Ok(Self { cell_size, half_dims, dims: half_dims * 2 })
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Cells on each side of the origin along one axis.
    #[inline]
    pub fn half_dims(&self) -> i32 {
        self.half_dims
    }

    /// Cells per axis.
    #[inline]
    pub fn dims(&self) -> i32 {
        self.dims
    }

    /// Total number of cells (`dims³`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        let d = self.dims as usize;
        d * d * d
    }

    /// Cell coordinate of `v` along one axis, clamped to `[0, dims - 1]`.
    #[inline]
    pub fn axis_coord(&self, v: f64) -> i32 {
        // `as` saturates and maps NaN to 0, so the i64 add cannot overflow.
        let rounded = (v / self.cell_size + 0.5).floor() as i64;
        (rounded + self.half_dims as i64).clamp(0, self.dims as i64 - 1) as i32
    }

    /// Clamped integer coordinates of the cell containing `position`.
    #[inline]
    pub fn cell_coords(&self, position: DVec3) -> IVec3 {
        IVec3::new(
            self.axis_coord(position.x),
            self.axis_coord(position.y),
            self.axis_coord(position.z),
        )
    }

    /// Flattened index of in-range `coords`.
    #[inline]
    pub fn cell_index(&self, coords: IVec3) -> CellId {
        debug_assert!(self.in_range(coords), "cell coords {coords} out of range");
        let d = self.dims as u32;
        CellId(coords.x as u32 + coords.y as u32 * d + coords.z as u32 * d * d)
    }

    /// Flattened index of the cell containing `position`.
    #[inline]
    pub fn cell_index_of(&self, position: DVec3) -> CellId {
        self.cell_index(self.cell_coords(position))
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    pub fn coords_of(&self, cell: CellId) -> IVec3 {
        let d = self.dims as u32;
        let i = cell.0;
        IVec3::new((i % d) as i32, ((i / d) % d) as i32, (i / (d * d)) as i32)
    }

    /// Geometric box of a cell as `(center, half_extent)`.
    #[inline]
    pub fn cell_box_of(&self, coords: IVec3) -> (DVec3, f64) {
        let center = (coords - IVec3::splat(self.half_dims)).as_dvec3() * self.cell_size;
        (center, self.cell_size * 0.5)
    }

    /// Region of space whose positions map to `coords`: the geometric box
    /// with the outer faces of edge cells opened to infinity.
    pub fn cell_bounds(&self, coords: IVec3) -> Aabb {
        let (center, half) = self.cell_box_of(coords);
        let mut b = Aabb::from_center(center, half);
        let last = self.dims - 1;
        for axis in 0..3 {
            if coords[axis] == 0 {
                b.min[axis] = f64::NEG_INFINITY;
            }
            if coords[axis] == last {
                b.max[axis] = f64::INFINITY;
            }
        }
        b
    }

    /// Inclusive range of cell coordinates that `origin ± radius` spans,
    /// clamped to the grid.
    #[inline]
    pub fn coord_range(&self, origin: DVec3, radius: f64) -> (IVec3, IVec3) {
        let r = DVec3::splat(radius);
        (self.cell_coords(origin - r), self.cell_coords(origin + r))
    }

    #[inline]
    fn in_range(&self, coords: IVec3) -> bool {
        coords.cmpge(IVec3::ZERO).all() && coords.cmplt(IVec3::splat(self.dims)).all()
    }
}
