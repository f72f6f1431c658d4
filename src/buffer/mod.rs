//! Raw attribute storage and strided views over it.
//!
//! - [`Buffer`] - owned, cheaply clonable bytes shared between attributes
//! - [`BufferView`] - borrowed, zero-copy element descriptor used by the traversal

mod view;

pub use view::BufferView;

use bytemuck::Pod;
use std::fmt;
use std::sync::Arc;

/// Immutable byte storage backing one or more attributes.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Arc<[u8]>,
}

impl Buffer {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { data: bytes.into() }
    }

    /// Copy a typed slice into a new buffer (host byte order).
    pub fn from_slice<T: Pod>(values: &[T]) -> Self {
        Self::from_bytes(bytemuck::cast_slice::<T, u8>(values))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({} bytes)", self.data.len())
    }
}
