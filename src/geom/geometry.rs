//! Attribute containers.

use smallvec::SmallVec;

use super::attribute::{Attribute, AttributeType, DEFAULT_POSITION_ATTRIBUTE_NAME};

/// Slot of an attribute inside its [`Geometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(pub usize);

/// Ordered set of attributes describing one mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    attributes: SmallVec<[Attribute; 4]>,
    bounding_volume_position_attribute: Option<AttributeId>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute and return its slot.
    pub fn add_attribute(&mut self, attribute: Attribute) -> AttributeId {
        self.attributes.push(attribute);
        AttributeId(self.attributes.len() - 1)
    }

    /// Builder variant of [`Geometry::add_attribute`].
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, id: AttributeId) -> Option<&Attribute> {
        self.attributes.get(id.0)
    }

    /// Select the attribute used for bounding volume computation.
    ///
    /// `None` restores the lookup by [`DEFAULT_POSITION_ATTRIBUTE_NAME`].
    pub fn set_bounding_volume_position_attribute(&mut self, id: Option<AttributeId>) {
        self.bounding_volume_position_attribute = id;
    }

    pub fn bounding_volume_position_attribute(&self) -> Option<AttributeId> {
        self.bounding_volume_position_attribute
    }

    /// Attribute the bounding volume is computed from.
    ///
    /// The explicit selection wins; otherwise (or if the selected slot does
    /// not exist) the first attribute carrying the default position name.
    pub fn position_attribute(&self) -> Option<&Attribute> {
        self.bounding_volume_position_attribute
            .and_then(|id| self.attribute(id))
            .or_else(|| {
                self.attributes
                    .iter()
                    .find(|a| a.name() == DEFAULT_POSITION_ATTRIBUTE_NAME)
            })
    }

    /// First index attribute that references a buffer.
    pub fn index_attribute(&self) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.attribute_type() == AttributeType::Index && a.buffer().is_some())
    }
}
