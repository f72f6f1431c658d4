//! Draw parameters consumed by the bounding volume calculator.

use crate::bounds::DrawTraversal;
use crate::buffer::BufferView;
use crate::util::{Error, Result};

use super::attribute::AttributeType;
use super::view::{GeometryView, PrimitiveType};

/// Snapshot of everything the calculator reads from a draw call.
#[derive(Clone, Copy, Debug)]
pub struct DrawParameters<'a> {
    pub position: BufferView<'a>,
    pub index: Option<BufferView<'a>>,
    /// Elements to traverse; 0 means the whole index or position attribute.
    pub draw_vertex_count: usize,
    pub primitive_restart_enabled: bool,
    /// Compared against zero-extended index values.
    pub primitive_restart_value: u32,
    pub primitive_type: PrimitiveType,
}

impl<'a> DrawParameters<'a> {
    /// Unindexed triangles over `position`, drawing every element.
    pub fn new(position: BufferView<'a>) -> Self {
        Self {
            position,
            index: None,
            draw_vertex_count: 0,
            primitive_restart_enabled: false,
            primitive_restart_value: u32::MAX,
            primitive_type: PrimitiveType::Triangles,
        }
    }

    pub fn with_index(mut self, index: BufferView<'a>) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_draw_vertex_count(mut self, count: usize) -> Self {
        self.draw_vertex_count = count;
        self
    }

    /// Enable primitive restart on `value`.
    pub fn with_primitive_restart(mut self, value: u32) -> Self {
        self.primitive_restart_enabled = true;
        self.primitive_restart_value = value;
        self
    }

    pub fn with_primitive_type(mut self, primitive_type: PrimitiveType) -> Self {
        self.primitive_type = primitive_type;
        self
    }

    /// Gather parameters from a view and its geometry.
    ///
    /// The position attribute is the geometry's explicit bounding volume
    /// attribute or the default-named one; the index attribute is the first
    /// index attribute with a buffer. A zero vertex count resolves to the
    /// index count, or the position count when unindexed.
    pub fn from_view(view: &'a GeometryView) -> Result<Self> {
        if !view.is_enabled() {
            return Err(Error::Disabled);
        }
        if view.primitive_type() == PrimitiveType::Patches {
            return Err(Error::Patches);
        }
        let geometry = view.geometry().ok_or(Error::NoGeometry)?;

        let attribute = geometry
            .position_attribute()
            .ok_or(Error::MissingPositionAttribute)?;
        if attribute.attribute_type() != AttributeType::Vertex
            || !attribute.component_type().is_position_type()
            || attribute.component_count() < 3
        {
            return Err(Error::UnsuitablePositionAttribute {
                component: attribute.component_type(),
                count: attribute.component_count(),
            });
        }
        let position = attribute.view().ok_or(Error::MissingBuffer)?;

        let mut draw_vertex_count = usize::try_from(view.vertex_count()).unwrap_or(0);

        let index = match geometry.index_attribute() {
            Some(attribute) => {
                if draw_vertex_count == 0 {
                    draw_vertex_count = attribute.count();
                }
                if !attribute.component_type().is_index_type() {
                    return Err(Error::UnsupportedIndexType(attribute.component_type()));
                }
                attribute.view()
            }
            None => None,
        };

        if index.is_none() && draw_vertex_count == 0 {
            draw_vertex_count = position.count();
        }

        Ok(Self {
            position,
            index,
            draw_vertex_count,
            primitive_restart_enabled: view.primitive_restart_enabled(),
            primitive_restart_value: view.restart_index_value() as u32,
            primitive_type: view.primitive_type(),
        })
    }

    /// Reject configurations the calculator cannot bound.
    pub fn validate(&self) -> Result<()> {
        if self.primitive_type == PrimitiveType::Patches {
            return Err(Error::Patches);
        }
        if !self.position.is_position_compatible() {
            return Err(Error::UnsuitablePositionAttribute {
                component: self.position.component_type(),
                count: self.position.component_count(),
            });
        }
        if let Some(index) = &self.index {
            if !index.component_type().is_index_type() {
                return Err(Error::UnsupportedIndexType(index.component_type()));
            }
        }
        Ok(())
    }

    /// Number of elements the traversal will walk.
    pub fn effective_count(&self) -> usize {
        match (&self.index, self.draw_vertex_count) {
            (Some(index), 0) => index.count(),
            (None, 0) => self.position.count(),
            (_, n) => n,
        }
    }

    /// Build the element traversal these parameters describe.
    pub fn traversal(&self) -> Result<DrawTraversal<'a>> {
        DrawTraversal::new(
            self.position,
            self.index,
            self.draw_vertex_count,
            self.primitive_restart_enabled,
            self.primitive_restart_value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::geom::{Attribute, Geometry, DEFAULT_POSITION_ATTRIBUTE_NAME};
    use crate::util::{ComponentType, ElementType};

    fn triangle() -> Geometry {
        Geometry::new().with_attribute(Attribute::positions(
            Buffer::from_slice(&[0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
            3,
        ))
    }

    #[test]
    fn test_unindexed_count_defaults_to_positions() {
        let view = GeometryView::with_geometry(triangle());
        let params = DrawParameters::from_view(&view).unwrap();
        assert!(params.index.is_none());
        assert_eq!(params.draw_vertex_count, 3);
        assert_eq!(params.primitive_restart_value, u32::MAX);
    }

    #[test]
    fn test_indexed_count_defaults_to_indices() {
        let geometry = triangle().with_attribute(Attribute::indices(
            ComponentType::UnsignedShort,
            Buffer::from_slice(&[0u16, 1, 2, 0, 2, 1]),
            6,
        ));
        let view = GeometryView::with_geometry(geometry);
        let params = DrawParameters::from_view(&view).unwrap();
        assert_eq!(params.draw_vertex_count, 6);
        assert_eq!(params.index.unwrap().element_type(), ElementType::UINT16);
    }

    #[test]
    fn test_explicit_vertex_count_kept() {
        let mut view = GeometryView::with_geometry(triangle());
        view.set_vertex_count(2);
        assert_eq!(DrawParameters::from_view(&view).unwrap().draw_vertex_count, 2);
    }

    #[test]
    fn test_view_gates() {
        let mut view = GeometryView::with_geometry(triangle());
        view.set_primitive_type(PrimitiveType::Patches);
        assert_eq!(DrawParameters::from_view(&view).unwrap_err(), Error::Patches);

        let mut view = GeometryView::with_geometry(triangle());
        view.set_enabled(false);
        assert_eq!(DrawParameters::from_view(&view).unwrap_err(), Error::Disabled);

        let view = GeometryView::new();
        assert_eq!(DrawParameters::from_view(&view).unwrap_err(), Error::NoGeometry);

        let view = GeometryView::with_geometry(Geometry::new());
        assert_eq!(
            DrawParameters::from_view(&view).unwrap_err(),
            Error::MissingPositionAttribute
        );
    }

    #[test]
    fn test_position_requirements() {
        let two_component = Geometry::new().with_attribute(
            Attribute::new(
                DEFAULT_POSITION_ATTRIBUTE_NAME,
                AttributeType::Vertex,
                ComponentType::Float,
                2,
                2,
            )
            .with_buffer(Buffer::from_slice(&[0.0f32; 4])),
        );
        let view = GeometryView::with_geometry(two_component);
        assert!(matches!(
            DrawParameters::from_view(&view),
            Err(Error::UnsuitablePositionAttribute { count: 2, .. })
        ));

        let no_buffer = Geometry::new().with_attribute(Attribute::new(
            DEFAULT_POSITION_ATTRIBUTE_NAME,
            AttributeType::Vertex,
            ComponentType::Float,
            3,
            2,
        ));
        let view = GeometryView::with_geometry(no_buffer);
        assert_eq!(DrawParameters::from_view(&view).unwrap_err(), Error::MissingBuffer);
    }

    #[test]
    fn test_validate() {
        let data = [0.0f32; 9];
        let bytes: &[u8] = bytemuck::cast_slice(&data);
        let position = BufferView::new(bytes, ElementType::VEC3F, 3);
        assert!(DrawParameters::new(position).validate().is_ok());

        let patches = DrawParameters::new(position).with_primitive_type(PrimitiveType::Patches);
        assert_eq!(patches.validate(), Err(Error::Patches));

        let float_index = BufferView::new(bytes, ElementType::scalar(ComponentType::Float), 3);
        let params = DrawParameters::new(position).with_index(float_index);
        assert_eq!(
            params.validate(),
            Err(Error::UnsupportedIndexType(ComponentType::Float))
        );
    }
}
