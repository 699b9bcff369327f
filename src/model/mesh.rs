//! Mesh and primitive types

use super::index::{AccessorIndex, MaterialIndex};

/// How a primitive's vertices are assembled for drawing
///
/// The numeric codes match the GLB interchange format (and OpenGL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    /// Individual points
    Points = 0,
    /// Individual line segments
    Lines = 1,
    /// Closed line loop
    LineLoop = 2,
    /// Connected line strip
    LineStrip = 3,
    /// Individual triangles
    Triangles = 4,
    /// Connected triangle strip
    TriangleStrip = 5,
    /// Triangle fan
    TriangleFan = 6,
}

impl PrimitiveMode {
    /// Map a numeric mode code, or `None` for an unrecognized code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(PrimitiveMode::Points),
            1 => Some(PrimitiveMode::Lines),
            2 => Some(PrimitiveMode::LineLoop),
            3 => Some(PrimitiveMode::LineStrip),
            4 => Some(PrimitiveMode::Triangles),
            5 => Some(PrimitiveMode::TriangleStrip),
            6 => Some(PrimitiveMode::TriangleFan),
            _ => None,
        }
    }
}

/// One named vertex attribute of a primitive (e.g. "POSITION", "NORMAL")
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute semantic name
    pub name: String,
    /// Accessor holding the attribute data
    pub accessor: AccessorIndex,
}

/// A drawable primitive within a mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Drawing mode (triangles when absent)
    pub mode: PrimitiveMode,
    /// Accessor holding the index buffer, for indexed drawing
    pub indices: Option<AccessorIndex>,
    /// Material applied to this primitive, if any
    pub material: Option<MaterialIndex>,
    /// Vertex attributes, in file order
    pub attributes: Vec<Attribute>,
}

impl Primitive {
    /// Create an attribute-less triangle primitive
    pub fn new() -> Self {
        Self {
            mode: PrimitiveMode::Triangles,
            indices: None,
            material: None,
            attributes: Vec::new(),
        }
    }

    /// Look up an attribute's accessor by semantic name
    pub fn attribute(&self, name: &str) -> Option<AccessorIndex> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.accessor)
    }
}

impl Default for Primitive {
    fn default() -> Self {
        Self::new()
    }
}

/// A mesh: an ordered list of primitives
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Primitives, in file order
    pub primitives: Vec<Primitive>,
}

impl Mesh {
    /// Create a mesh with no primitives
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
        }
    }
}
