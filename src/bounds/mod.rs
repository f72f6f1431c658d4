//! Bounding volume computation over draw-call geometry.
//!
//! - [`DrawTraversal`] / [`VertexVisitor`] - ordered walk over drawn positions
//! - [`ExtremePointFinder`] - AABB and axis-extreme points
//! - [`FarthestPointFinder`] - farthest point from a reference
//! - [`BoundingVolumeCalculator`] - Ritter's bounding sphere plus AABB

mod calculator;
mod extreme;
mod farthest;
mod visitor;

pub use calculator::{
    calculate_local_bounding_volume, BoundingVolume, BoundingVolumeCalculator, CalculatorOptions,
};
pub use extreme::{ExtremePointFinder, ExtremePoints};
pub use farthest::FarthestPointFinder;
pub use visitor::{DrawTraversal, VertexVisitor};
