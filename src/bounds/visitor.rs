//! Position traversal shared by all bounding volume passes.
//!
//! A [`DrawTraversal`] walks the logical draw elements of a position
//! attribute, optionally through an index attribute, skipping
//! primitive-restart indices. Each decoded point is handed to a
//! [`VertexVisitor`] together with its ordinal, the count of points
//! visited before it.

use crate::buffer::BufferView;
use crate::util::{Error, Result, Vec3};

/// Validated element walk over one draw call.
#[derive(Clone, Copy, Debug)]
pub struct DrawTraversal<'a> {
    position: BufferView<'a>,
    index: Option<BufferView<'a>>,
    count: usize,
    restart: Option<u32>,
}

impl<'a> DrawTraversal<'a> {
    /// Check the attributes and resolve the element count.
    ///
    /// A `draw_count` of 0 walks the whole index attribute, or the whole
    /// position attribute when unindexed.
    pub fn new(
        position: BufferView<'a>,
        index: Option<BufferView<'a>>,
        draw_count: usize,
        restart_enabled: bool,
        restart_value: u32,
    ) -> Result<Self> {
        if !position.is_position_compatible() {
            return Err(Error::UnsuitablePositionAttribute {
                component: position.component_type(),
                count: position.component_count(),
            });
        }
        position.validate_stride()?;

        if let Some(index) = &index {
            if !index.component_type().is_index_type() {
                return Err(Error::UnsupportedIndexType(index.component_type()));
            }
            index.validate_stride()?;
        }

        let count = match (&index, draw_count) {
            (Some(index), 0) => index.count(),
            (None, 0) => position.count(),
            (_, n) => n,
        };

        Ok(Self {
            position,
            index,
            count,
            restart: restart_enabled.then_some(restart_value),
        })
    }

    /// Number of elements walked, restart indices included.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Decode element `i`; `None` for a primitive-restart index.
    pub fn point_at(&self, i: usize) -> Result<Option<Vec3>> {
        let vertex = match &self.index {
            Some(index) => {
                let idx = index.read_index(i)?;
                if self.restart == Some(idx) {
                    return Ok(None);
                }
                if idx as usize >= self.position.count() {
                    return Err(Error::IndexOutOfRange {
                        index: idx,
                        count: self.position.count(),
                    });
                }
                idx as usize
            }
            None => i,
        };
        self.position.read_vec3(vertex).map(Some)
    }

    /// Call `f(ordinal, point)` for every non-restart element in order.
    ///
    /// Returns the number of points visited. Stops at the first decode error.
    pub fn for_each<F>(&self, mut f: F) -> Result<usize>
    where
        F: FnMut(usize, Vec3),
    {
        let mut ordinal = 0;
        for i in 0..self.count {
            if let Some(p) = self.point_at(i)? {
                f(ordinal, p);
                ordinal += 1;
            }
        }
        Ok(ordinal)
    }
}

/// Per-point callback of a traversal pass.
pub trait VertexVisitor {
    /// Called once per visited point; `ordinal` is 0 for the first one.
    fn visit(&mut self, ordinal: usize, x: f32, y: f32, z: f32);

    /// Feed every point of `traversal` to this visitor.
    fn traverse(&mut self, traversal: &DrawTraversal<'_>) -> Result<usize> {
        traversal.for_each(|ordinal, p| self.visit(ordinal, p.x, p.y, p.z))
    }

    /// Build a traversal from raw views and run it.
    ///
    /// Returns false if the position view is missing or unsuitable, or if
    /// any element fails to decode; each failure is logged once. An empty
    /// draw succeeds without visits.
    fn apply(
        &mut self,
        position: Option<&BufferView<'_>>,
        index: Option<&BufferView<'_>>,
        draw_count: usize,
        restart_enabled: bool,
        restart_value: u32,
    ) -> bool {
        let result = position
            .ok_or(Error::MissingPositionAttribute)
            .and_then(|position| {
                DrawTraversal::new(*position, index.copied(), draw_count, restart_enabled, restart_value)
            })
            .and_then(|traversal| self.traverse(&traversal));
        match result {
            Ok(_) => true,
            Err(error) => {
                if error.is_diagnostic() {
                    tracing::warn!(%error, "vertex traversal failed");
                }
                false
            }
        }
    }
}
