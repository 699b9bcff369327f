//! Scene and node types

use glam::Mat4;

use super::index::{CameraIndex, MeshIndex, NodeIndex};

/// A scene: an ordered list of root nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Scene name (empty when absent)
    pub name: String,
    /// Root node references, in file order
    pub nodes: Vec<NodeIndex>,
}

impl Scene {
    /// Create an empty, unnamed scene
    pub fn new() -> Self {
        Self {
            name: String::new(),
            nodes: Vec::new(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// A node in the scene hierarchy
///
/// Carries an optional mesh and camera reference, child node references, and
/// the resolved local transform. The transform is composed at parse time as
/// `matrix * translation * rotation * scale`, where each factor is identity
/// unless its JSON key was present. The explicit `matrix` field and the TRS
/// components are composed together rather than treated as alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node name (empty when absent)
    pub name: String,
    /// Mesh rendered at this node, if any
    pub mesh: Option<MeshIndex>,
    /// Camera attached to this node, if any
    pub camera: Option<CameraIndex>,
    /// Child node references, in file order
    pub children: Vec<NodeIndex>,
    /// Resolved local transform
    pub matrix: Mat4,
}

impl Node {
    /// Create a leaf node with an identity transform
    pub fn new() -> Self {
        Self {
            name: String::new(),
            mesh: None,
            camera: None,
            children: Vec::new(),
            matrix: Mat4::IDENTITY,
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
