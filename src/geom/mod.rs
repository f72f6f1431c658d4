//! Geometry data model consumed by the calculator.
//!
//! - [`Attribute`] / [`Geometry`] - typed buffer slices grouped per mesh
//! - [`GeometryView`] - draw-call parameters with replicated change messages
//! - [`DrawParameters`] - the validated input bundle for bounding volume computation

mod attribute;
mod geometry;
mod params;
mod view;

pub use attribute::{Attribute, AttributeType, DEFAULT_POSITION_ATTRIBUTE_NAME};
pub use geometry::{AttributeId, Geometry};
pub use params::DrawParameters;
pub use view::{GeometryView, PrimitiveType, PropertyChange, PropertyValue, ViewProperty};
