//! Component base types - the scalar storage types of vertex attributes.

use bytemuck::{Pod, Zeroable};
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// Base type of a single attribute component.
///
/// Mirrors the vertex base types a renderer exposes for attribute data.
/// Only [`ComponentType::Float`] is accepted for positions and only the
/// unsigned integer types are accepted for indices; the rest exist so
/// that unsuitable attributes can be described and rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ComponentType {
    /// Signed 8-bit integer
    Byte = 0,
    /// Unsigned 8-bit integer
    UnsignedByte = 1,
    /// Signed 16-bit integer
    Short = 2,
    /// Unsigned 16-bit integer
    UnsignedShort = 3,
    /// Signed 32-bit integer
    Int = 4,
    /// Unsigned 32-bit integer
    UnsignedInt = 5,
    /// 16-bit floating point (IEEE 754 half precision)
    HalfFloat = 6,
    /// 32-bit floating point (IEEE 754 single precision)
    #[default]
    Float = 7,
    /// 64-bit floating point (IEEE 754 double precision)
    Double = 8,
}

impl ComponentType {
    /// Returns the size in bytes of a single component of this type.
    #[inline]
    pub const fn num_bytes(self) -> usize {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort | Self::HalfFloat => 2,
            Self::Int | Self::UnsignedInt | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// Returns the name of this type as a string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Byte => "int8_t",
            Self::UnsignedByte => "uint8_t",
            Self::Short => "int16_t",
            Self::UnsignedShort => "uint16_t",
            Self::Int => "int32_t",
            Self::UnsignedInt => "uint32_t",
            Self::HalfFloat => "float16_t",
            Self::Float => "float32_t",
            Self::Double => "float64_t",
        }
    }

    /// Returns true if this type can back an index attribute.
    #[inline]
    pub const fn is_index_type(self) -> bool {
        matches!(self, Self::UnsignedByte | Self::UnsignedShort | Self::UnsignedInt)
    }

    /// Returns true if this type can back a position attribute.
    #[inline]
    pub const fn is_position_type(self) -> bool {
        matches!(self, Self::Float)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// === Index decoding ===

/// Unsigned integer types that can be stored in an index buffer.
///
/// Values are decoded little-endian and zero-extended to `u32`.
pub trait IndexPod: Pod + Zeroable + Copy + Default {
    /// The corresponding [`ComponentType`] enum value.
    const COMPONENT_TYPE: ComponentType;

    /// Size of this type in bytes.
    const SIZE: usize = std::mem::size_of::<Self>();

    /// Decode one value from the start of `bytes`.
    fn read(bytes: &[u8]) -> u32;
}

impl IndexPod for u8 {
    const COMPONENT_TYPE: ComponentType = ComponentType::UnsignedByte;

    #[inline]
    fn read(bytes: &[u8]) -> u32 {
        u32::from(bytes[0])
    }
}

impl IndexPod for u16 {
    const COMPONENT_TYPE: ComponentType = ComponentType::UnsignedShort;

    #[inline]
    fn read(bytes: &[u8]) -> u32 {
        u32::from(LittleEndian::read_u16(bytes))
    }
}

impl IndexPod for u32 {
    const COMPONENT_TYPE: ComponentType = ComponentType::UnsignedInt;

    #[inline]
    fn read(bytes: &[u8]) -> u32 {
        LittleEndian::read_u32(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_sizes() {
        assert_eq!(ComponentType::UnsignedByte.num_bytes(), 1);
        assert_eq!(ComponentType::UnsignedShort.num_bytes(), 2);
        assert_eq!(ComponentType::HalfFloat.num_bytes(), 2);
        assert_eq!(ComponentType::Float.num_bytes(), 4);
        assert_eq!(ComponentType::Double.num_bytes(), 8);
    }

    #[test]
    fn test_index_types() {
        assert!(ComponentType::UnsignedByte.is_index_type());
        assert!(ComponentType::UnsignedShort.is_index_type());
        assert!(ComponentType::UnsignedInt.is_index_type());
        assert!(!ComponentType::Int.is_index_type());
        assert!(!ComponentType::Float.is_index_type());
    }

    #[test]
    fn test_index_decode() {
        assert_eq!(<u8 as IndexPod>::read(&[0xAB]), 0xAB);
        assert_eq!(<u16 as IndexPod>::read(&[0x34, 0x12]), 0x1234);
        assert_eq!(<u32 as IndexPod>::read(&[0xFF, 0xFF, 0xFF, 0xFF]), u32::MAX);
        assert_eq!(<u16 as IndexPod>::COMPONENT_TYPE, ComponentType::UnsignedShort);
    }
}
