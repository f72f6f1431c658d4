//! Math type re-exports and bounding volume primitives.
//!
//! This module re-exports the `glam` types used across the crate and
//! provides the box and sphere value types produced by the calculator.

pub use glam::Vec3;

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// 3D axis-aligned bounding box with single precision.
#[derive(Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct BBox3f {
    pub min: Vec3,
    pub max: Vec3,
}

impl BBox3f {
    /// Empty bounding box (inverted, will expand on first point).
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a new bounding box from min and max points.
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a bounding box from a single point.
    #[inline]
    pub fn from_point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Check if this box is empty (inverted on some axis).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Expand this box to include a point.
    #[inline]
    pub fn expand_by_point(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Check if a point lies inside the box (boundary included).
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Get the center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the size (extents) of the box.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

impl Default for BBox3f {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for BBox3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox3f({:?} - {:?})", self.min, self.max)
    }
}

/// Bounding sphere with single precision.
#[derive(Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    #[inline]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point lies within `radius + eps` of the center.
    #[inline]
    pub fn contains(&self, p: Vec3, eps: f32) -> bool {
        p.distance(self.center) <= self.radius + eps
    }

    /// Sphere moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.center + offset, self.radius)
    }
}

impl fmt::Debug for BoundingSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingSphere({:?}, r={})", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox3f() {
        let mut b = BBox3f::EMPTY;
        assert!(b.is_empty());

        b.expand_by_point(Vec3::ZERO);
        assert!(!b.is_empty());
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::ZERO);

        b.expand_by_point(Vec3::ONE);
        assert_eq!(b.center(), Vec3::splat(0.5));
        assert_eq!(b.size(), Vec3::ONE);
        assert!(b.contains(Vec3::splat(0.25)));
        assert!(!b.contains(Vec3::new(0.5, 2.0, 0.5)));
    }

    #[test]
    fn test_sphere_contains() {
        let s = BoundingSphere::new(Vec3::ZERO, 1.0);
        assert!(s.contains(Vec3::X, 0.0));
        assert!(!s.contains(Vec3::splat(1.0), 1e-5));

        let moved = s.translated(Vec3::new(2.0, 0.0, 0.0));
        assert!(moved.contains(Vec3::new(3.0, 0.0, 0.0), 0.0));
        assert_eq!(moved.radius, 1.0);
    }

    #[test]
    fn test_bounds_pod() {
        assert_eq!(std::mem::size_of::<BBox3f>(), 24);
        assert_eq!(std::mem::size_of::<BoundingSphere>(), 16);
    }
}
