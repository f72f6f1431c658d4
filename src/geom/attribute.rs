//! Vertex and index attributes.

use crate::buffer::{Buffer, BufferView};
use crate::util::{ComponentType, ElementType};

/// Name looked up when no explicit bounding-volume position attribute is set.
pub const DEFAULT_POSITION_ATTRIBUTE_NAME: &str = "vertexPosition";

/// Role of an attribute within a geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeType {
    /// Per-vertex data (positions, normals, ...)
    #[default]
    Vertex,
    /// Element indices into the vertex attributes
    Index,
}

/// A typed, strided slice of a [`Buffer`].
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    name: String,
    attribute_type: AttributeType,
    component_type: ComponentType,
    component_count: u32,
    count: usize,
    byte_offset: usize,
    byte_stride: usize,
    buffer: Option<Buffer>,
}

impl Attribute {
    /// Create an attribute without a buffer.
    pub fn new(
        name: impl Into<String>,
        attribute_type: AttributeType,
        component_type: ComponentType,
        component_count: u32,
        count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            component_type,
            component_count,
            count,
            byte_offset: 0,
            byte_stride: 0,
            buffer: None,
        }
    }

    /// Packed float3 positions under the default position name.
    pub fn positions(buffer: Buffer, count: usize) -> Self {
        Self::new(
            DEFAULT_POSITION_ATTRIBUTE_NAME,
            AttributeType::Vertex,
            ComponentType::Float,
            3,
            count,
        )
        .with_buffer(buffer)
    }

    /// Packed scalar indices of the given type.
    pub fn indices(component_type: ComponentType, buffer: Buffer, count: usize) -> Self {
        Self::new("", AttributeType::Index, component_type, 1, count).with_buffer(buffer)
    }

    pub fn with_buffer(mut self, buffer: Buffer) -> Self {
        self.buffer = Some(buffer);
        self
    }

    pub fn with_byte_offset(mut self, byte_offset: usize) -> Self {
        self.byte_offset = byte_offset;
        self
    }

    pub fn with_byte_stride(mut self, byte_stride: usize) -> Self {
        self.byte_stride = byte_stride;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    /// Number of components per element (the vertex size).
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn byte_stride(&self) -> usize {
        self.byte_stride
    }

    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    pub fn element_type(&self) -> ElementType {
        ElementType::new(self.component_type, self.component_count)
    }

    /// Borrowed view over the attribute data, if a buffer is attached.
    pub fn view(&self) -> Option<BufferView<'_>> {
        let buffer = self.buffer.as_ref()?;
        Some(
            BufferView::new(buffer.as_bytes(), self.element_type(), self.count)
                .with_offset(self.byte_offset)
                .with_stride(self.byte_stride),
        )
    }
}
