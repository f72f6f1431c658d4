//! Axis extremes of a point stream (first pass of the calculator).

use crate::util::{BBox3f, Vec3};

use super::visitor::VertexVisitor;
#[cfg(feature = "parallel")]
use super::visitor::DrawTraversal;
#[cfg(feature = "parallel")]
use crate::util::Result;

/// The six points attaining the minimum and maximum on each axis.
///
/// Ties keep the earliest point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtremePoints {
    pub x_min: Vec3,
    pub x_max: Vec3,
    pub y_min: Vec3,
    pub y_max: Vec3,
    pub z_min: Vec3,
    pub z_max: Vec3,
}

impl ExtremePoints {
    /// All six extremes at `p`.
    #[inline]
    pub fn from_point(p: Vec3) -> Self {
        Self {
            x_min: p,
            x_max: p,
            y_min: p,
            y_max: p,
            z_min: p,
            z_max: p,
        }
    }

    /// Update each extreme that `p` strictly improves.
    #[inline]
    pub fn include(&mut self, p: Vec3) {
        if p.x < self.x_min.x {
            self.x_min = p;
        }
        if p.x > self.x_max.x {
            self.x_max = p;
        }
        if p.y < self.y_min.y {
            self.y_min = p;
        }
        if p.y > self.y_max.y {
            self.y_max = p;
        }
        if p.z < self.z_min.z {
            self.z_min = p;
        }
        if p.z > self.z_max.z {
            self.z_max = p;
        }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x_min.x, self.y_min.y, self.z_min.z)
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x_max.x, self.y_max.y, self.z_max.z)
    }

    #[inline]
    pub fn aabb(&self) -> BBox3f {
        BBox3f::new(self.min(), self.max())
    }

    /// Extremes of a whole traversal, computed on the rayon pool.
    ///
    /// Returns `Ok(None)` when no point is visited. Results are identical
    /// to running an [`ExtremePointFinder`] over the same traversal,
    /// including NaN coordinates.
    #[cfg(feature = "parallel")]
    pub fn par_collect(traversal: &DrawTraversal<'_>) -> Result<Option<Self>> {
        use rayon::prelude::*;

        let partial = (0..traversal.len())
            .into_par_iter()
            .map(|i| traversal.point_at(i))
            .try_fold(PartialExtremes::default, |mut acc, point: Result<Option<Vec3>>| {
                if let Some(p) = point? {
                    acc.include(p);
                }
                Ok(acc)
            })
            .try_reduce(PartialExtremes::default, |a, b| Ok(a.merge(b)))?;
        Ok(partial.finish())
    }
}

/// Extremes of a contiguous run of points, ignoring NaN coordinates.
///
/// The sequential finder seeds every axis with the first point and never
/// lets a NaN coordinate replace an extreme afterwards. A run that starts
/// mid-stream cannot know whether it holds the seed, so it keeps its first
/// point aside and resolves the seed only in [`PartialExtremes::finish`].
#[cfg(feature = "parallel")]
#[derive(Clone, Copy, Debug, Default)]
struct PartialExtremes {
    first: Option<Vec3>,
    min: [Option<Vec3>; 3],
    max: [Option<Vec3>; 3],
}

#[cfg(feature = "parallel")]
impl PartialExtremes {
    fn include(&mut self, p: Vec3) {
        self.first.get_or_insert(p);
        for axis in 0..3 {
            let v = p[axis];
            if v.is_nan() {
                continue;
            }
            if self.min[axis].map_or(true, |m| v < m[axis]) {
                self.min[axis] = Some(p);
            }
            if self.max[axis].map_or(true, |m| v > m[axis]) {
                self.max[axis] = Some(p);
            }
        }
    }

    /// `self` must cover the points preceding `later`'s.
    fn merge(mut self, later: Self) -> Self {
        self.first = self.first.or(later.first);
        for axis in 0..3 {
            self.min[axis] = match (self.min[axis], later.min[axis]) {
                (Some(a), Some(b)) if b[axis] < a[axis] => Some(b),
                (a, b) => a.or(b),
            };
            self.max[axis] = match (self.max[axis], later.max[axis]) {
                (Some(a), Some(b)) if b[axis] > a[axis] => Some(b),
                (a, b) => a.or(b),
            };
        }
        self
    }

    fn finish(self) -> Option<ExtremePoints> {
        let first = self.first?;
        let pick = |slot: Option<Vec3>, axis: usize| {
            if first[axis].is_nan() {
                first
            } else {
                slot.unwrap_or(first)
            }
        };
        Some(ExtremePoints {
            x_min: pick(self.min[0], 0),
            x_max: pick(self.max[0], 0),
            y_min: pick(self.min[1], 1),
            y_max: pick(self.max[1], 1),
            z_min: pick(self.min[2], 2),
            z_max: pick(self.max[2], 2),
        })
    }
}

/// Visitor recording the AABB and the six axis-extreme points.
#[derive(Clone, Debug, Default)]
pub struct ExtremePointFinder {
    extremes: ExtremePoints,
    visited: usize,
}

impl ExtremePointFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extremes(&self) -> &ExtremePoints {
        &self.extremes
    }

    pub fn min(&self) -> Vec3 {
        self.extremes.min()
    }

    pub fn max(&self) -> Vec3 {
        self.extremes.max()
    }

    /// Number of points seen.
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn has_points(&self) -> bool {
        self.visited > 0
    }
}

impl VertexVisitor for ExtremePointFinder {
    fn visit(&mut self, ordinal: usize, x: f32, y: f32, z: f32) {
        let p = Vec3::new(x, y, z);
        if ordinal == 0 {
            self.extremes = ExtremePoints::from_point(p);
        } else {
            self.extremes.include(p);
        }
        self.visited += 1;
    }
}
