//! # Bounding Volume
//!
//! Local bounding volumes for indexed vertex geometry.
//!
//! Given a raw position buffer, optionally drawn through an index buffer,
//! the calculator produces an axis-aligned bounding box and a bounding
//! sphere enclosing every drawn vertex. The sphere follows Ritter's
//! approximate minimum enclosing sphere: three farthest-point passes after
//! the AABB pass, linear in the number of drawn elements.
//!
//! Inputs may use arbitrary strides and offsets, `u8`/`u16`/`u32` indices
//! and primitive restart. Unsupported layouts and empty draws produce no
//! bounding volume rather than an error that unwinds into the caller.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (component types, errors, math)
//! - [`buffer`] - Raw storage and strided views
//! - [`geom`] - Attributes, geometry, geometry view and draw parameters
//! - [`bounds`] - Traversal, point finders and the calculator
//!
//! ## Example
//!
//! ```
//! use bounding_volume::prelude::*;
//!
//! let positions = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let indices = [0u16, 1, 2];
//!
//! let position = BufferView::new(bytemuck::cast_slice(&positions), ElementType::VEC3F, 3);
//! let index = BufferView::new(bytemuck::cast_slice(&indices), ElementType::UINT16, 3);
//!
//! let params = DrawParameters::new(position).with_index(index);
//! let volume = BoundingVolumeCalculator::new().calculate(&params).unwrap();
//!
//! assert_eq!(volume.max, Vec3::new(1.0, 1.0, 0.0));
//! assert!((volume.radius - 0.5f32.sqrt()).abs() < 1e-6);
//! ```

pub mod util;
pub mod buffer;
pub mod geom;
pub mod bounds;

// Re-export commonly used types
pub use util::{ComponentType, ElementType, Error, Result};
pub use bounds::{calculate_local_bounding_volume, BoundingVolume, BoundingVolumeCalculator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{BBox3f, BoundingSphere, ComponentType, ElementType, Error, Result, Vec3};
    pub use crate::buffer::{Buffer, BufferView};
    pub use crate::geom::*;
    pub use crate::bounds::*;
}
