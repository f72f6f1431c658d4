//! Error types for bounding volume computation.

use super::ComponentType;
use thiserror::Error;

/// Main error type for bounding volume computation.
///
/// Every failure of the calculator maps to one of these variants; the
/// public `calculate` entry points fold them into an empty result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Tessellation patches carry control points, not drawable vertices
    #[error("Patches have no vertex bounding volume")]
    Patches,

    /// The geometry view is disabled
    #[error("Geometry view is disabled")]
    Disabled,

    /// The geometry view references no geometry
    #[error("Geometry view has no geometry")]
    NoGeometry,

    /// Neither an explicit nor a default-named position attribute exists
    #[error("No position attribute found")]
    MissingPositionAttribute,

    /// Position attribute has the wrong role, base type or component count
    #[error("Position attribute not suited for bounding volume computation: {component}[{count}]")]
    UnsuitablePositionAttribute { component: ComponentType, count: u32 },

    /// Attribute does not reference a buffer
    #[error("Attribute not referencing a valid buffer")]
    MissingBuffer,

    /// Index attribute base type is not u8/u16/u32
    #[error("Unsupported index attribute type: {0}")]
    UnsupportedIndexType(ComponentType),

    /// Stride too small to hold one element
    #[error("Byte stride {stride} smaller than element size {element_size}")]
    InvalidStride { stride: usize, element_size: usize },

    /// Element lies (partially) outside the buffer
    #[error("Element {element} out of bounds (count: {count}, buffer size: {size})")]
    OutOfBounds { element: usize, count: usize, size: usize },

    /// Index refers past the end of the position attribute
    #[error("Index {index} out of range (vertex count: {count})")]
    IndexOutOfRange { index: u32, count: usize },

    /// Traversal produced no points
    #[error("No points visited")]
    EmptyStream,

    /// Sphere computation produced an invalid radius
    #[error("Degenerate bounding sphere")]
    Degenerate,
}

impl Error {
    /// Returns true if this failure deserves a diagnostic.
    ///
    /// Unsupported configurations and decode failures are reported; a
    /// disabled node, missing geometry or buffer, an empty stream and a
    /// degenerate sphere yield an empty result silently.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Self::Patches
                | Self::MissingPositionAttribute
                | Self::UnsuitablePositionAttribute { .. }
                | Self::UnsupportedIndexType(_)
                | Self::InvalidStride { .. }
                | Self::OutOfBounds { .. }
                | Self::IndexOutOfRange { .. }
        )
    }
}

/// Result type alias for bounding volume operations.
pub type Result<T> = std::result::Result<T, Error>;
