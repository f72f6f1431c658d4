//! Farthest point from a reference (diameter and growth passes).

use crate::util::Vec3;

use super::visitor::VertexVisitor;

/// Visitor tracking the point with the largest squared distance to a
/// reference point.
///
/// With `set_reference_point` the first visited point becomes the
/// reference. Equal distances replace the current farthest point, so
/// the last of several equidistant points wins.
#[derive(Clone, Debug)]
pub struct FarthestPointFinder {
    reference_pt: Vec3,
    max_dist_pt: Vec3,
    max_length_squared: f32,
    has_no_points: bool,
    set_reference_point: bool,
}

impl FarthestPointFinder {
    /// Finder measuring from the first visited point.
    pub fn seeded() -> Self {
        Self {
            set_reference_point: true,
            ..Self::from_reference(Vec3::ZERO)
        }
    }

    /// Finder measuring from a fixed point.
    pub fn from_reference(reference_pt: Vec3) -> Self {
        Self {
            reference_pt,
            max_dist_pt: Vec3::ZERO,
            max_length_squared: 0.0,
            has_no_points: true,
            set_reference_point: false,
        }
    }

    pub fn reference_point(&self) -> Vec3 {
        self.reference_pt
    }

    pub fn max_dist_point(&self) -> Vec3 {
        self.max_dist_pt
    }

    pub fn max_length_squared(&self) -> f32 {
        self.max_length_squared
    }

    pub fn has_no_points(&self) -> bool {
        self.has_no_points
    }
}

impl VertexVisitor for FarthestPointFinder {
    fn visit(&mut self, _ordinal: usize, x: f32, y: f32, z: f32) {
        let p = Vec3::new(x, y, z);

        if self.has_no_points && self.set_reference_point {
            self.max_length_squared = 0.0;
            self.reference_pt = p;
        }
        let length_squared = (p - self.reference_pt).length_squared();
        if length_squared >= self.max_length_squared {
            self.max_dist_pt = p;
            self.max_length_squared = length_squared;
        }
        self.has_no_points = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_uses_first_point() {
        let mut f = FarthestPointFinder::seeded();
        f.visit(0, 1.0, 1.0, 1.0);
        f.visit(1, 2.0, 1.0, 1.0);
        f.visit(2, 1.0, 4.0, 1.0);
        f.visit(3, 0.0, 1.0, 1.0);

        assert_eq!(f.reference_point(), Vec3::ONE);
        assert_eq!(f.max_dist_point(), Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(f.max_length_squared(), 9.0);
        assert!(!f.has_no_points());
    }

    #[test]
    fn test_fixed_reference() {
        let mut f = FarthestPointFinder::from_reference(Vec3::new(10.0, 0.0, 0.0));
        f.visit(0, 0.0, 0.0, 0.0);
        f.visit(1, 9.0, 0.0, 0.0);
        assert_eq!(f.reference_point(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(f.max_dist_point(), Vec3::ZERO);
    }

    #[test]
    fn test_equidistant_last_wins() {
        let mut f = FarthestPointFinder::from_reference(Vec3::ZERO);
        f.visit(0, 1.0, 0.0, 0.0);
        f.visit(1, 0.0, 1.0, 0.0);
        f.visit(2, 0.0, 0.0, -1.0);
        assert_eq!(f.max_dist_point(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_no_points() {
        let f = FarthestPointFinder::seeded();
        assert!(f.has_no_points());
    }
}
