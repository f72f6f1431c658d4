//! Utility types shared by the buffer, geometry and bounds modules.
//!
//! - [`ComponentType`] - Enum of attribute component base types
//! - [`ElementType`] - component type + component count
//! - [`Error`] / [`Result`] - Error handling
//! - Math types ([`BBox3f`], [`BoundingSphere`]) and glam re-exports

mod pod;
mod data_type;
mod error;
mod math;

pub use pod::*;
pub use data_type::*;
pub use error::*;
pub use math::*;
