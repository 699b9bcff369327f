//! The decoded file model
//!
//! [`GlbFile`] owns every decoded entity and the container bytes themselves.
//! Entities never hold pointers to each other; all cross-references are
//! typed indices resolved through the bounds-checked accessors here.

use std::ops::Range;

use crate::error::{Error, Result};

use super::accessor::{Accessor, Buffer, BufferView};
use super::camera::Camera;
use super::index::{
    AccessorIndex, BufferIndex, BufferViewIndex, CameraIndex, ImageIndex, MaterialIndex, MeshIndex,
    NodeIndex, SceneIndex, TextureIndex,
};
use super::material::Material;
use super::mesh::Mesh;
use super::scene::{Node, Scene};
use super::texture::{Image, Texture};

/// Container bytes in one of the three ownership modes
///
/// *Owned* and *copy* modes both end up here as `Owned` (copy mode clones the
/// caller's slice on the way in); *borrowed* mode keeps the caller's slice
/// alive through the lifetime parameter. Either way the bytes outlive every
/// [`GlbFile::view_bytes`] call and are released exactly once.
#[derive(Debug)]
pub(crate) enum BufferData<'a> {
    /// The file owns the bytes and drops them with the model
    Owned(Vec<u8>),
    /// The caller retains ownership and must outlive the file
    Borrowed(&'a [u8]),
}

impl BufferData<'_> {
    pub(crate) fn bytes(&self) -> &[u8] {
        match self {
            BufferData::Owned(data) => data,
            BufferData::Borrowed(data) => data,
        }
    }
}

/// A fully decoded GLB file
///
/// Produced only by a decode that succeeded in full; there is no partial or
/// degraded state. All entity collections are in file order, which is
/// semantically significant: indices stored in one entity refer to positions
/// in these collections.
#[derive(Debug)]
pub struct GlbFile<'a> {
    pub(crate) data: BufferData<'a>,
    /// Byte range of the BIN chunk body within `data`
    pub(crate) bin: Range<usize>,
    /// Default scene, when the document names one
    pub scene: Option<SceneIndex>,
    /// All scenes, in file order
    pub scenes: Vec<Scene>,
    /// All nodes, in file order
    pub nodes: Vec<Node>,
    /// All cameras, in file order
    pub cameras: Vec<Camera>,
    /// All meshes, in file order
    pub meshes: Vec<Mesh>,
    /// All materials, in file order
    pub materials: Vec<Material>,
    /// All accessors, in file order
    pub accessors: Vec<Accessor>,
    /// All textures, in file order
    pub textures: Vec<Texture>,
    /// All buffer views, in file order
    pub buffer_views: Vec<BufferView>,
    /// All images, in file order
    pub images: Vec<Image>,
    /// All buffers, in file order
    pub buffers: Vec<Buffer>,
}

impl<'a> GlbFile<'a> {
    /// Look up a scene, or `None` if the index is out of range
    pub fn scene(&self, index: SceneIndex) -> Option<&Scene> {
        self.scenes.get(index.index())
    }

    /// Look up a node, or `None` if the index is out of range
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.index())
    }

    /// Look up a camera, or `None` if the index is out of range
    pub fn camera(&self, index: CameraIndex) -> Option<&Camera> {
        self.cameras.get(index.index())
    }

    /// Look up a mesh, or `None` if the index is out of range
    pub fn mesh(&self, index: MeshIndex) -> Option<&Mesh> {
        self.meshes.get(index.index())
    }

    /// Look up a material, or `None` if the index is out of range
    pub fn material(&self, index: MaterialIndex) -> Option<&Material> {
        self.materials.get(index.index())
    }

    /// Look up an accessor, or `None` if the index is out of range
    pub fn accessor(&self, index: AccessorIndex) -> Option<&Accessor> {
        self.accessors.get(index.index())
    }

    /// Look up a texture, or `None` if the index is out of range
    pub fn texture(&self, index: TextureIndex) -> Option<&Texture> {
        self.textures.get(index.index())
    }

    /// Look up a buffer view, or `None` if the index is out of range
    pub fn buffer_view(&self, index: BufferViewIndex) -> Option<&BufferView> {
        self.buffer_views.get(index.index())
    }

    /// Look up an image, or `None` if the index is out of range
    pub fn image(&self, index: ImageIndex) -> Option<&Image> {
        self.images.get(index.index())
    }

    /// Look up a buffer, or `None` if the index is out of range
    pub fn buffer(&self, index: BufferIndex) -> Option<&Buffer> {
        self.buffers.get(index.index())
    }

    /// The raw bytes of the BIN chunk body
    pub fn bin_bytes(&self) -> &[u8] {
        &self.data.bytes()[self.bin.clone()]
    }

    /// Resolve the raw bytes a buffer view describes
    ///
    /// Returns exactly `view.byte_length` bytes starting at
    /// `view.byte_offset` within the BIN chunk body. Fails for views into
    /// any buffer other than 0 (multi-buffer files are unsupported) and for
    /// views whose range runs past the end of the BIN chunk.
    pub fn view_bytes(&self, view: &BufferView) -> Result<&[u8]> {
        if view.buffer != BufferIndex(0) {
            return Err(Error::Unsupported(format!(
                "multi-buffer file: buffer view references buffer {}",
                view.buffer
            )));
        }

        let bin = self.bin_bytes();
        let start = view.byte_offset as usize;
        let end = start
            .checked_add(view.byte_length as usize)
            .filter(|end| *end <= bin.len())
            .ok_or_else(|| {
                Error::InvalidContainer(format!(
                    "buffer view {}+{} overruns the {}-byte BIN chunk",
                    view.byte_offset,
                    view.byte_length,
                    bin.len()
                ))
            })?;

        Ok(&bin[start..end])
    }
}
