//! Zero-copy strided views over raw attribute bytes.

use byteorder::{ByteOrder, LittleEndian};

use crate::util::{ComponentType, ElementType, Error, IndexPod, Result, Vec3};

/// Descriptor of `count` strided elements inside a borrowed byte slice.
///
/// Element `i` starts at `byte_offset + i * stride`, where a stride of 0
/// means tightly packed. The view never copies; decoding reads straight
/// from the borrowed bytes, little-endian.
#[derive(Clone, Copy, Debug)]
pub struct BufferView<'a> {
    bytes: &'a [u8],
    byte_offset: usize,
    byte_stride: usize,
    element: ElementType,
    count: usize,
}

impl<'a> BufferView<'a> {
    /// Tightly packed view starting at byte 0.
    pub fn new(bytes: &'a [u8], element: ElementType, count: usize) -> Self {
        Self {
            bytes,
            byte_offset: 0,
            byte_stride: 0,
            element,
            count,
        }
    }

    /// Set the offset of the first element.
    pub fn with_offset(mut self, byte_offset: usize) -> Self {
        self.byte_offset = byte_offset;
        self
    }

    /// Set the distance between consecutive elements (0 = packed).
    pub fn with_stride(mut self, byte_stride: usize) -> Self {
        self.byte_stride = byte_stride;
        self
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Stride as configured, 0 meaning packed.
    #[inline]
    pub fn byte_stride(&self) -> usize {
        self.byte_stride
    }

    /// Stride actually used to step between elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.element.effective_stride(self.byte_stride)
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.element
    }

    #[inline]
    pub fn component_type(&self) -> ComponentType {
        self.element.component
    }

    #[inline]
    pub fn component_count(&self) -> u32 {
        self.element.count
    }

    /// Number of logical elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True if this view can be decoded as positions (float, >= 3 components).
    pub fn is_position_compatible(&self) -> bool {
        self.element.component.is_position_type() && self.element.count >= 3
    }

    /// Check that the stride leaves room for a whole element.
    pub fn validate_stride(&self) -> Result<()> {
        let element_size = self.element.num_bytes();
        if self.stride() < element_size {
            return Err(Error::InvalidStride {
                stride: self.stride(),
                element_size,
            });
        }
        Ok(())
    }

    /// Raw bytes of element `i`.
    pub fn element_bytes(&self, i: usize) -> Result<&'a [u8]> {
        let out_of_bounds = || Error::OutOfBounds {
            element: i,
            count: self.count,
            size: self.bytes.len(),
        };
        if i >= self.count {
            return Err(out_of_bounds());
        }
        let start = i
            .checked_mul(self.stride())
            .and_then(|o| o.checked_add(self.byte_offset))
            .ok_or_else(out_of_bounds)?;
        let end = start
            .checked_add(self.element.num_bytes())
            .ok_or_else(out_of_bounds)?;
        self.bytes.get(start..end).ok_or_else(out_of_bounds)
    }

    /// Decode the first three float components of element `i`.
    ///
    /// Components past the third are ignored.
    pub fn read_vec3(&self, i: usize) -> Result<Vec3> {
        if !self.is_position_compatible() {
            return Err(Error::UnsuitablePositionAttribute {
                component: self.element.component,
                count: self.element.count,
            });
        }
        let raw = self.element_bytes(i)?;
        Ok(Vec3::new(
            LittleEndian::read_f32(&raw[0..4]),
            LittleEndian::read_f32(&raw[4..8]),
            LittleEndian::read_f32(&raw[8..12]),
        ))
    }

    /// Decode element `i` as an index of type `T`, zero-extended.
    ///
    /// `T` must match the view's component type.
    #[inline]
    pub fn read_index_as<T: IndexPod>(&self, i: usize) -> Result<u32> {
        if T::COMPONENT_TYPE != self.element.component {
            return Err(Error::UnsupportedIndexType(self.element.component));
        }
        let raw = self.element_bytes(i)?;
        Ok(T::read(&raw[..T::SIZE]))
    }

    /// Decode element `i` as an index, dispatching on the component type.
    pub fn read_index(&self, i: usize) -> Result<u32> {
        match self.element.component {
            ComponentType::UnsignedByte => self.read_index_as::<u8>(i),
            ComponentType::UnsignedShort => self.read_index_as::<u16>(i),
            ComponentType::UnsignedInt => self.read_index_as::<u32>(i),
            other => Err(Error::UnsupportedIndexType(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_positions() {
        let data: [f32; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = BufferView::new(bytemuck::cast_slice(&data), ElementType::VEC3F, 2);

        assert_eq!(view.stride(), 12);
        assert_eq!(view.read_vec3(0).unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(view.read_vec3(1).unwrap(), Vec3::new(4.0, 5.0, 6.0));
        assert!(matches!(view.read_vec3(2), Err(Error::OutOfBounds { element: 2, .. })));
    }

    #[test]
    fn test_interleaved_positions() {
        // position (3 floats) + uv (2 floats), offset past a 1-float header
        let data: [f32; 11] = [
            99.0, //
            1.0, 2.0, 3.0, 0.0, 0.0, //
            4.0, 5.0, 6.0, 1.0, 1.0,
        ];
        let view = BufferView::new(bytemuck::cast_slice(&data), ElementType::VEC3F, 2)
            .with_offset(4)
            .with_stride(20);

        assert_eq!(view.read_vec3(0).unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(view.read_vec3(1).unwrap(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_vec4_ignores_w() {
        let data: [f32; 4] = [1.0, 2.0, 3.0, 7.0];
        let view = BufferView::new(bytemuck::cast_slice(&data), ElementType::VEC4F, 1);
        assert_eq!(view.read_vec3(0).unwrap(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_truncated_buffer() {
        let data: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
        let view = BufferView::new(bytemuck::cast_slice(&data), ElementType::VEC3F, 2);
        assert!(view.read_vec3(0).is_ok());
        assert!(matches!(view.read_vec3(1), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_stride_too_small() {
        let data = [0u8; 64];
        let view = BufferView::new(&data, ElementType::VEC3F, 4).with_stride(8);
        assert_eq!(
            view.validate_stride(),
            Err(Error::InvalidStride { stride: 8, element_size: 12 })
        );
        assert!(BufferView::new(&data, ElementType::VEC3F, 4).validate_stride().is_ok());
    }

    #[test]
    fn test_index_widths() {
        let u8s = [3u8, 250];
        let v = BufferView::new(&u8s, ElementType::UINT8, 2);
        assert_eq!(v.read_index(1).unwrap(), 250);

        let u16s = [1u16, 65535];
        let v = BufferView::new(bytemuck::cast_slice(&u16s), ElementType::UINT16, 2);
        assert_eq!(v.read_index(0).unwrap(), 1);
        assert_eq!(v.read_index(1).unwrap(), 65535);

        let u32s = [7u32, u32::MAX];
        let v = BufferView::new(bytemuck::cast_slice(&u32s), ElementType::UINT32, 2);
        assert_eq!(v.read_index(1).unwrap(), u32::MAX);
    }

    #[test]
    fn test_index_width_mismatch() {
        let u8s = [1u8, 2, 3];
        let v = BufferView::new(&u8s, ElementType::UINT8, 3);
        assert_eq!(
            v.read_index_as::<u32>(0),
            Err(Error::UnsupportedIndexType(ComponentType::UnsignedByte))
        );
        assert_eq!(
            v.read_index_as::<u16>(2),
            Err(Error::UnsupportedIndexType(ComponentType::UnsignedByte))
        );
        assert_eq!(v.read_index_as::<u8>(2).unwrap(), 3);
    }

    #[test]
    fn test_unsupported_index_type() {
        let data = [0f32; 2];
        let v = BufferView::new(
            bytemuck::cast_slice(&data),
            ElementType::scalar(ComponentType::Float),
            2,
        );
        assert_eq!(v.read_index(0), Err(Error::UnsupportedIndexType(ComponentType::Float)));
    }

    #[test]
    fn test_non_float_positions_rejected() {
        let data = [0u32; 3];
        let v = BufferView::new(
            bytemuck::cast_slice(&data),
            ElementType::new(ComponentType::UnsignedInt, 3),
            1,
        );
        assert!(matches!(v.read_vec3(0), Err(Error::UnsuitablePositionAttribute { .. })));
    }
}
