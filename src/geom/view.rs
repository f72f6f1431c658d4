//! Geometry view - draw-call parameters wrapped around a [`Geometry`].
//!
//! A view records how a geometry is drawn: primitive type, counts, offsets
//! and primitive restart. Every setter that actually changes a value marks
//! the view dirty and queues a [`PropertyChange`] message that a mirror
//! of the view can replay.

use std::sync::Arc;

use super::geometry::Geometry;

/// Primitive topology used to draw a geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
    LinesAdjacency,
    TrianglesAdjacency,
    LineStripAdjacency,
    TriangleStripAdjacency,
    /// Tessellation patches; vertex count is a control-point count
    Patches,
}

/// Property of a [`GeometryView`] named in a change message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewProperty {
    Enabled,
    InstanceCount,
    VertexCount,
    IndexOffset,
    FirstInstance,
    FirstVertex,
    IndexBufferByteOffset,
    RestartIndexValue,
    VerticesPerPatch,
    PrimitiveRestartEnabled,
    Geometry,
    PrimitiveType,
}

/// New value carried by a change message.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    PrimitiveType(PrimitiveType),
    Geometry(Option<Arc<Geometry>>),
}

/// One replicated property update.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyChange {
    pub property: ViewProperty,
    pub value: PropertyValue,
}

/// Draw parameters of a geometry.
#[derive(Clone, Debug)]
pub struct GeometryView {
    enabled: bool,
    instance_count: i32,
    vertex_count: i32,
    index_offset: i32,
    first_instance: i32,
    first_vertex: i32,
    index_buffer_byte_offset: i32,
    restart_index_value: i32,
    vertices_per_patch: i32,
    primitive_restart_enabled: bool,
    geometry: Option<Arc<Geometry>>,
    primitive_type: PrimitiveType,

    dirty: bool,
    notifications_blocked: bool,
    changes: Vec<PropertyChange>,
}

impl Default for GeometryView {
    fn default() -> Self {
        Self {
            enabled: true,
            instance_count: 1,
            vertex_count: 0,
            index_offset: 0,
            first_instance: 0,
            first_vertex: 0,
            index_buffer_byte_offset: 0,
            restart_index_value: -1,
            vertices_per_patch: 0,
            primitive_restart_enabled: false,
            geometry: None,
            primitive_type: PrimitiveType::Triangles,
            dirty: false,
            notifications_blocked: false,
            changes: Vec::new(),
        }
    }
}

macro_rules! int_property {
    ($getter:ident, $setter:ident, $prop:ident) => {
        pub fn $getter(&self) -> i32 {
            self.$getter
        }

        /// Returns true if the value changed.
        pub fn $setter(&mut self, value: i32) -> bool {
            if self.$getter == value {
                return false;
            }
            self.$getter = value;
            self.notify(ViewProperty::$prop, PropertyValue::Int(value));
            true
        }
    };
}

impl GeometryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View drawing `geometry` with default parameters, no change queued.
    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            geometry: Some(Arc::new(geometry)),
            ..Self::default()
        }
    }

    int_property!(instance_count, set_instance_count, InstanceCount);
    int_property!(vertex_count, set_vertex_count, VertexCount);
    int_property!(index_offset, set_index_offset, IndexOffset);
    int_property!(first_instance, set_first_instance, FirstInstance);
    int_property!(first_vertex, set_first_vertex, FirstVertex);
    int_property!(index_buffer_byte_offset, set_index_buffer_byte_offset, IndexBufferByteOffset);
    int_property!(restart_index_value, set_restart_index_value, RestartIndexValue);
    int_property!(vertices_per_patch, set_vertices_per_patch, VerticesPerPatch);

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        self.notify(ViewProperty::Enabled, PropertyValue::Bool(enabled));
        true
    }

    pub fn primitive_restart_enabled(&self) -> bool {
        self.primitive_restart_enabled
    }

    pub fn set_primitive_restart_enabled(&mut self, enabled: bool) -> bool {
        if self.primitive_restart_enabled == enabled {
            return false;
        }
        self.primitive_restart_enabled = enabled;
        self.notify(ViewProperty::PrimitiveRestartEnabled, PropertyValue::Bool(enabled));
        true
    }

    pub fn primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    pub fn set_primitive_type(&mut self, primitive_type: PrimitiveType) -> bool {
        if self.primitive_type == primitive_type {
            return false;
        }
        self.primitive_type = primitive_type;
        self.notify(ViewProperty::PrimitiveType, PropertyValue::PrimitiveType(primitive_type));
        true
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_deref()
    }

    /// Replace the geometry. Identity, not content, decides whether it changed.
    pub fn set_geometry(&mut self, geometry: Option<Arc<Geometry>>) -> bool {
        let same = match (&self.geometry, &geometry) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        if same {
            return false;
        }
        self.geometry = geometry.clone();
        self.notify(ViewProperty::Geometry, PropertyValue::Geometry(geometry));
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// While blocked, setters update values silently.
    pub fn set_notifications_blocked(&mut self, blocked: bool) {
        self.notifications_blocked = blocked;
    }

    pub fn notifications_blocked(&self) -> bool {
        self.notifications_blocked
    }

    /// Drain queued change messages in the order they happened.
    pub fn take_changes(&mut self) -> Vec<PropertyChange> {
        std::mem::take(&mut self.changes)
    }

    /// Apply a change message received from another view.
    pub fn apply_change(&mut self, change: PropertyChange) -> bool {
        use PropertyValue as V;
        use ViewProperty as P;
        match (change.property, change.value) {
            (P::Enabled, V::Bool(v)) => self.set_enabled(v),
            (P::PrimitiveRestartEnabled, V::Bool(v)) => self.set_primitive_restart_enabled(v),
            (P::InstanceCount, V::Int(v)) => self.set_instance_count(v),
            (P::VertexCount, V::Int(v)) => self.set_vertex_count(v),
            (P::IndexOffset, V::Int(v)) => self.set_index_offset(v),
            (P::FirstInstance, V::Int(v)) => self.set_first_instance(v),
            (P::FirstVertex, V::Int(v)) => self.set_first_vertex(v),
            (P::IndexBufferByteOffset, V::Int(v)) => self.set_index_buffer_byte_offset(v),
            (P::RestartIndexValue, V::Int(v)) => self.set_restart_index_value(v),
            (P::VerticesPerPatch, V::Int(v)) => self.set_vertices_per_patch(v),
            (P::PrimitiveType, V::PrimitiveType(v)) => self.set_primitive_type(v),
            (P::Geometry, V::Geometry(v)) => self.set_geometry(v),
            (property, value) => {
                tracing::warn!(?property, ?value, "mismatched property change ignored");
                false
            }
        }
    }

    fn notify(&mut self, property: ViewProperty, value: PropertyValue) {
        if self.notifications_blocked {
            return;
        }
        self.dirty = true;
        self.changes.push(PropertyChange { property, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = GeometryView::new();
        assert!(v.is_enabled());
        assert_eq!(v.instance_count(), 1);
        assert_eq!(v.vertex_count(), 0);
        assert_eq!(v.restart_index_value(), -1);
        assert_eq!(v.primitive_type(), PrimitiveType::Triangles);
        assert!(!v.primitive_restart_enabled());
        assert!(v.geometry().is_none());
        assert!(!v.is_dirty());
    }

    #[test]
    fn test_setter_only_notifies_on_change() {
        let mut v = GeometryView::new();
        assert!(!v.set_instance_count(1));
        assert!(!v.is_dirty());

        assert!(v.set_vertex_count(6));
        assert!(v.set_primitive_type(PrimitiveType::Lines));
        assert!(!v.set_primitive_type(PrimitiveType::Lines));
        assert!(v.is_dirty());

        let changes = v.take_changes();
        assert_eq!(
            changes,
            vec![
                PropertyChange { property: ViewProperty::VertexCount, value: PropertyValue::Int(6) },
                PropertyChange {
                    property: ViewProperty::PrimitiveType,
                    value: PropertyValue::PrimitiveType(PrimitiveType::Lines),
                },
            ]
        );
        assert!(v.take_changes().is_empty());
    }

    #[test]
    fn test_blocked_notifications() {
        let mut v = GeometryView::new();
        v.set_notifications_blocked(true);
        assert!(v.set_first_vertex(3));
        assert_eq!(v.first_vertex(), 3);
        assert!(!v.is_dirty());
        assert!(v.take_changes().is_empty());
    }

    #[test]
    fn test_geometry_identity() {
        let g = Arc::new(Geometry::new());
        let mut v = GeometryView::new();
        assert!(v.set_geometry(Some(g.clone())));
        assert!(!v.set_geometry(Some(g)));
        assert!(v.set_geometry(Some(Arc::new(Geometry::new()))));
        assert!(v.set_geometry(None));
        assert_eq!(v.take_changes().len(), 3);
    }

    #[test]
    fn test_replay_changes_onto_mirror() {
        let mut front = GeometryView::new();
        front.set_primitive_restart_enabled(true);
        front.set_restart_index_value(0xFFFF);
        front.set_enabled(false);

        let mut back = GeometryView::new();
        for change in front.take_changes() {
            assert!(back.apply_change(change));
        }
        assert!(back.primitive_restart_enabled());
        assert_eq!(back.restart_index_value(), 0xFFFF);
        assert!(!back.is_enabled());
    }

    #[test]
    fn test_mismatched_change_ignored() {
        let mut v = GeometryView::new();
        let applied = v.apply_change(PropertyChange {
            property: ViewProperty::VertexCount,
            value: PropertyValue::Bool(true),
        });
        assert!(!applied);
        assert_eq!(v.vertex_count(), 0);
    }
}
