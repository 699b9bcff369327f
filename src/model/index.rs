//! Typed index newtypes
//!
//! Cross-entity references in a GLB document are zero-based positions into
//! the per-kind collections on [`GlbFile`](crate::GlbFile), not pointers.
//! Each reference kind gets its own newtype so a node's mesh index cannot be
//! handed to a material lookup by accident. Indices are never validated when
//! parsed; a dangling reference is only discovered when it is resolved
//! through a `GlbFile` accessor.

use std::fmt;

macro_rules! index_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            /// Zero-based position in the owning collection
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_type!(
    /// Reference to a scene by position in `GlbFile::scenes`
    SceneIndex
);
index_type!(
    /// Reference to a node by position in `GlbFile::nodes`
    NodeIndex
);
index_type!(
    /// Reference to a camera by position in `GlbFile::cameras`
    CameraIndex
);
index_type!(
    /// Reference to a mesh by position in `GlbFile::meshes`
    MeshIndex
);
index_type!(
    /// Reference to a material by position in `GlbFile::materials`
    MaterialIndex
);
index_type!(
    /// Reference to an accessor by position in `GlbFile::accessors`
    AccessorIndex
);
index_type!(
    /// Reference to a texture by position in `GlbFile::textures`
    TextureIndex
);
index_type!(
    /// Reference to a buffer view by position in `GlbFile::buffer_views`
    BufferViewIndex
);
index_type!(
    /// Reference to an image by position in `GlbFile::images`
    ImageIndex
);
index_type!(
    /// Reference to a buffer by position in `GlbFile::buffers`
    BufferIndex
);
