//! Bounding volume calculator - AABB plus Ritter's approximate sphere.
//!
//! Four ordered passes over the same traversal:
//!
//! 1. axis extremes, giving the AABB;
//! 2. farthest point `y` from the first visited point;
//! 3. farthest point `z` from `y`, giving the initial sphere on `yz`;
//! 4. farthest point from that center, giving the final radius.
//!
//! The final sphere contains every visited point, since its radius is the
//! largest distance measured from its center.

use tracing::{debug, trace, warn};

use crate::buffer::BufferView;
use crate::geom::{DrawParameters, GeometryView};
use crate::util::{BBox3f, BoundingSphere, Error, Result, Vec3};

use super::extreme::{ExtremePointFinder, ExtremePoints};
use super::farthest::FarthestPointFinder;
use super::visitor::{DrawTraversal, VertexVisitor};

/// Local-space bounds of a draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingVolume {
    pub min: Vec3,
    pub max: Vec3,
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingVolume {
    #[inline]
    pub fn aabb(&self) -> BBox3f {
        BBox3f::new(self.min, self.max)
    }

    #[inline]
    pub fn sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius)
    }

    /// True if `p` is inside both the box and the sphere (sphere widened by `eps`).
    pub fn contains_point(&self, p: Vec3, eps: f32) -> bool {
        self.aabb().contains(p) && self.sphere().contains(p, eps)
    }

    pub fn is_valid(&self) -> bool {
        !self.aabb().is_empty() && self.radius >= 0.0
    }
}

/// Tuning knobs for [`BoundingVolumeCalculator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Run the extremes pass on the rayon pool.
    pub parallel_extremes: bool,
    /// Minimum element count before the extremes pass goes parallel.
    pub parallel_threshold: usize,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            parallel_extremes: cfg!(feature = "parallel"),
            parallel_threshold: 1 << 16,
        }
    }
}

/// Computes [`BoundingVolume`]s from draw parameters.
///
/// Holds no state between calls; every call reads a snapshot of the
/// borrowed buffers and returns a value.
#[derive(Clone, Debug, Default)]
pub struct BoundingVolumeCalculator {
    options: CalculatorOptions,
}

impl BoundingVolumeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CalculatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Bounds of a draw call, or `None` if it cannot be bounded.
    ///
    /// Unsupported configurations and decode failures emit one warning.
    pub fn calculate(&self, params: &DrawParameters<'_>) -> Option<BoundingVolume> {
        report(self.try_calculate(params))
    }

    /// Bounds of a draw call with the failure reason.
    pub fn try_calculate(&self, params: &DrawParameters<'_>) -> Result<BoundingVolume> {
        let _span = tracing::debug_span!(
            "bounding_volume",
            count = params.effective_count(),
            indexed = params.index.is_some()
        )
        .entered();

        params.validate()?;
        let traversal = params.traversal()?;
        self.compute(&traversal)
    }

    /// Bounds from raw views, mirroring [`VertexVisitor::apply`].
    ///
    /// A missing position view warns like a missing position attribute.
    pub fn apply(
        &self,
        position: Option<&BufferView<'_>>,
        index: Option<&BufferView<'_>>,
        draw_count: usize,
        restart_enabled: bool,
        restart_value: u32,
    ) -> Option<BoundingVolume> {
        let Some(position) = position else {
            return report(Err(Error::MissingPositionAttribute));
        };
        let mut params = DrawParameters::new(*position).with_draw_vertex_count(draw_count);
        params.index = index.copied();
        params.primitive_restart_enabled = restart_enabled;
        params.primitive_restart_value = restart_value;
        self.calculate(&params)
    }

    /// Run the four passes over a validated traversal.
    pub fn compute(&self, traversal: &DrawTraversal<'_>) -> Result<BoundingVolume> {
        // Pass 1: AABB
        let extremes = self.extremes(traversal)?;
        let (min, max) = (extremes.min(), extremes.max());
        trace!(?min, ?max, "extremes pass");

        // Pass 2: farthest from the first point
        let mut seed = FarthestPointFinder::seeded();
        seed.traverse(traversal)?;
        if seed.has_no_points() {
            return Err(Error::EmptyStream);
        }
        let y = seed.max_dist_point();

        // Pass 3: farthest from y
        let mut diameter = FarthestPointFinder::from_reference(y);
        diameter.traverse(traversal)?;
        let z = diameter.max_dist_point();
        let center = (y + z) * 0.5;
        trace!(?y, ?z, initial_radius = (z - y).length() * 0.5, "diameter pass");

        // Pass 4: grow to the farthest point from the center
        let mut growth = FarthestPointFinder::from_reference(center);
        growth.traverse(traversal)?;
        let radius = (center - growth.max_dist_point()).length();

        if center == Vec3::ZERO && radius < 0.0 {
            return Err(Error::Degenerate);
        }

        debug!(?min, ?max, ?center, radius, "bounding volume computed");
        Ok(BoundingVolume {
            min,
            max,
            center,
            radius,
        })
    }

    fn extremes(&self, traversal: &DrawTraversal<'_>) -> Result<ExtremePoints> {
        #[cfg(feature = "parallel")]
        if self.options.parallel_extremes && traversal.len() >= self.options.parallel_threshold {
            return ExtremePoints::par_collect(traversal)?.ok_or(Error::EmptyStream);
        }

        let mut finder = ExtremePointFinder::new();
        finder.traverse(traversal)?;
        if !finder.has_points() {
            return Err(Error::EmptyStream);
        }
        Ok(*finder.extremes())
    }
}

/// Bounds of a geometry view in the geometry's local space.
///
/// Returns `None` for disabled views, views without geometry or buffers
/// and empty draws. Patches, unsupported attribute layouts and undecodable
/// buffers also return `None`, with a warning.
pub fn calculate_local_bounding_volume(view: &GeometryView) -> Option<BoundingVolume> {
    let calculator = BoundingVolumeCalculator::new();
    report(DrawParameters::from_view(view).and_then(|params| calculator.try_calculate(&params)))
}

/// Fold a result into the empty-result surface, warning once for diagnostics.
fn report(result: Result<BoundingVolume>) -> Option<BoundingVolume> {
    match result {
        Ok(volume) => Some(volume),
        Err(error) if error.is_diagnostic() => {
            warn!(%error, "bounding volume not computed");
            None
        }
        Err(error) => {
            debug!(%error, "no bounding volume");
            None
        }
    }
}
