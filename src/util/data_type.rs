//! ElementType - combines a component type with a component count.

use super::ComponentType;
use std::fmt;

/// ElementType describes how one element of an attribute is stored.
///
/// It combines a [`ComponentType`] with a component count.
/// For example, a position would be Float with 3 components.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementType {
    /// The base component type
    pub component: ComponentType,
    /// Number of components (1 for indices, 3 or more for positions)
    pub count: u32,
}

impl ElementType {
    /// Create a new ElementType with given component type and count.
    #[inline]
    pub const fn new(component: ComponentType, count: u32) -> Self {
        Self { component, count }
    }

    /// Create a scalar ElementType (count = 1).
    #[inline]
    pub const fn scalar(component: ComponentType) -> Self {
        Self { component, count: 1 }
    }

    /// Returns the total size in bytes for one element.
    #[inline]
    pub const fn num_bytes(&self) -> usize {
        self.component.num_bytes() * self.count as usize
    }

    /// Resolve a byte stride, treating 0 as tightly packed.
    #[inline]
    pub const fn effective_stride(&self, byte_stride: usize) -> usize {
        if byte_stride == 0 {
            self.num_bytes()
        } else {
            byte_stride
        }
    }

    pub const UINT8: Self = Self::scalar(ComponentType::UnsignedByte);
    pub const UINT16: Self = Self::scalar(ComponentType::UnsignedShort);
    pub const UINT32: Self = Self::scalar(ComponentType::UnsignedInt);

    pub const VEC3F: Self = Self::new(ComponentType::Float, 3);
    pub const VEC4F: Self = Self::new(ComponentType::Float, 4);
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.component.name())
        } else {
            write!(f, "{}[{}]", self.component.name(), self.count)
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
