//! # libglb
//!
//! A pure Rust decoder for binary glTF (GLB) scene containers.
//!
//! A GLB file frames a JSON scene description and a raw binary payload in a
//! single byte stream. This library validates the container, parses the JSON
//! chunk, and builds a strongly-typed [`GlbFile`] holding every scene, node,
//! camera, mesh, material, accessor, texture, buffer view, image, and buffer
//! the document declares, plus bounds-checked access to the raw payload
//! bytes.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Strict container validation: header, chunk framing, and overrun checks
//!   safe against adversarial input
//! - All-or-nothing decoding: a valid [`GlbFile`] or an error, never a
//!   partial scene graph
//! - Typed cross-entity indices resolved lazily through bounds-checked
//!   lookup
//! - Three buffer ownership modes: owned, copied, or borrowed from the
//!   caller
//!
//! ## Example
//!
//! ```no_run
//! use libglb::GlbFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = GlbFile::open("scene.glb")?;
//!
//! println!("{} nodes in {} scenes", file.nodes.len(), file.scenes.len());
//! if let Some(index) = file.scene {
//!     let scene = file.scene(index).expect("dangling default scene index");
//!     println!("default scene has {} roots", scene.nodes.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Animations, skins, samplers, and sparse accessors are out of scope;
//! their keys are logged and skipped.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod container;
pub mod error;
pub mod model;
mod parser;

pub use error::{Error, Result};
pub use model::{
    Accessor, AccessorIndex, AlphaMode, Attribute, Buffer, BufferIndex, BufferView,
    BufferViewIndex, Camera, CameraIndex, ComponentType, ElementKind, GlbFile, Image, ImageIndex,
    ImageKind, Material, MaterialIndex, Mesh, MeshIndex, Node, NodeIndex, NormalTexture,
    OcclusionTexture, OrthographicCamera, PbrMetallicRoughness, PerspectiveCamera, Primitive,
    PrimitiveMode, Scene, SceneIndex, Texture, TextureIndex, TextureRef,
};

use model::BufferData;
use std::io::Read;
use std::path::Path;

impl GlbFile<'static> {
    /// Decode a GLB container, taking ownership of the buffer
    ///
    /// The buffer is released when the returned file is dropped.
    pub fn from_vec(data: Vec<u8>) -> Result<Self> {
        parser::decode(BufferData::Owned(data))
    }

    /// Decode a GLB container from a copy of the caller's bytes
    ///
    /// Duplicates the slice into an owned buffer, so the returned file has
    /// no tie to the caller's allocation.
    pub fn from_slice_copied(data: &[u8]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Read a whole GLB stream and decode it
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data)
    }

    /// Read and decode a GLB file from disk
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libglb::GlbFile;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = GlbFile::open("scene.glb")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_vec(std::fs::read(path)?)
    }
}

impl<'a> GlbFile<'a> {
    /// Decode a GLB container borrowed from the caller
    ///
    /// The caller retains ownership of the bytes, which must outlive the
    /// returned file; no copy is made.
    pub fn from_slice(data: &'a [u8]) -> Result<GlbFile<'a>> {
        parser::decode(BufferData::Borrowed(data))
    }
}
