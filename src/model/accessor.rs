//! Accessor, buffer view and buffer types

use super::index::{BufferIndex, BufferViewIndex};

/// Element shape of an accessor: how many components make up one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Single component
    Scalar,
    /// Two components
    Vec2,
    /// Three components
    Vec3,
    /// Four components
    Vec4,
    /// 2x2 matrix
    Mat2,
    /// 3x3 matrix
    Mat3,
    /// 4x4 matrix
    Mat4,
}

impl ElementKind {
    /// Map the JSON type string, or `None` for an unrecognized one
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SCALAR" => Some(ElementKind::Scalar),
            "VEC2" => Some(ElementKind::Vec2),
            "VEC3" => Some(ElementKind::Vec3),
            "VEC4" => Some(ElementKind::Vec4),
            "MAT2" => Some(ElementKind::Mat2),
            "MAT3" => Some(ElementKind::Mat3),
            "MAT4" => Some(ElementKind::Mat4),
            _ => None,
        }
    }

    /// Number of components in one element
    pub fn component_count(self) -> usize {
        match self {
            ElementKind::Scalar => 1,
            ElementKind::Vec2 => 2,
            ElementKind::Vec3 => 3,
            ElementKind::Vec4 => 4,
            ElementKind::Mat2 => 4,
            ElementKind::Mat3 => 9,
            ElementKind::Mat4 => 16,
        }
    }

    /// Arity of the min/max bounds arrays, or `None` for matrix shapes,
    /// which carry no bounds
    pub fn bounds_arity(self) -> Option<usize> {
        match self {
            ElementKind::Scalar => Some(1),
            ElementKind::Vec2 => Some(2),
            ElementKind::Vec3 => Some(3),
            ElementKind::Vec4 => Some(4),
            ElementKind::Mat2 | ElementKind::Mat3 | ElementKind::Mat4 => None,
        }
    }
}

/// Numeric component type of an accessor
///
/// The codes match the GLB interchange format (and OpenGL type enums).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// Signed 8-bit integer
    Byte = 0x1400,
    /// Unsigned 8-bit integer
    UnsignedByte = 0x1401,
    /// Signed 16-bit integer
    Short = 0x1402,
    /// Unsigned 16-bit integer
    UnsignedShort = 0x1403,
    /// Unsigned 32-bit integer
    UnsignedInt = 0x1405,
    /// 32-bit float
    Float = 0x1406,
}

impl ComponentType {
    /// Map a numeric component-type code, or `None` for an unknown code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x1400 => Some(ComponentType::Byte),
            0x1401 => Some(ComponentType::UnsignedByte),
            0x1402 => Some(ComponentType::Short),
            0x1403 => Some(ComponentType::UnsignedShort),
            0x1405 => Some(ComponentType::UnsignedInt),
            0x1406 => Some(ComponentType::Float),
            _ => None,
        }
    }

    /// Size of one component in bytes
    pub fn byte_size(self) -> usize {
        match self {
            ComponentType::Byte | ComponentType::UnsignedByte => 1,
            ComponentType::Short | ComponentType::UnsignedShort => 2,
            ComponentType::UnsignedInt | ComponentType::Float => 4,
        }
    }
}

/// A typed view describing how to interpret raw buffer bytes
///
/// `min`/`max` bounds are only decoded for float components on non-matrix
/// shapes; other component types drop their bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    /// Buffer view holding the data; absent means implicitly zero-filled
    pub buffer_view: Option<BufferViewIndex>,
    /// Byte offset into the buffer view (0 when absent)
    pub byte_offset: u32,
    /// Element shape
    pub kind: ElementKind,
    /// Numeric component type
    pub component_type: ComponentType,
    /// Number of elements
    pub count: u32,
    /// Per-component minimum, with `kind.bounds_arity()` entries
    pub min: Option<Vec<f32>>,
    /// Per-component maximum, with `kind.bounds_arity()` entries
    pub max: Option<Vec<f32>>,
}

/// A byte sub-range of a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferView {
    /// The buffer this view reads from (only buffer 0 is supported)
    pub buffer: BufferIndex,
    /// Byte offset of the view within the buffer (0 when absent)
    pub byte_offset: u32,
    /// Byte length of the view
    pub byte_length: u32,
    /// Distance between elements for interleaved data, if any
    pub byte_stride: Option<u32>,
}

/// A raw byte buffer
///
/// Only the declared length is stored; the bytes themselves live in the
/// container's BIN chunk and are resolved through
/// [`GlbFile::view_bytes`](crate::GlbFile::view_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buffer {
    /// Declared byte length
    pub byte_length: u32,
}
