//! Data structures representing decoded GLB files

mod accessor;
mod camera;
mod file;
mod index;
mod material;
mod mesh;
mod scene;
mod texture;

pub use accessor::{Accessor, Buffer, BufferView, ComponentType, ElementKind};
pub use camera::{Camera, OrthographicCamera, PerspectiveCamera};
pub use file::GlbFile;
pub use index::{
    AccessorIndex, BufferIndex, BufferViewIndex, CameraIndex, ImageIndex, MaterialIndex, MeshIndex,
    NodeIndex, SceneIndex, TextureIndex,
};
pub use material::{
    AlphaMode, Material, NormalTexture, OcclusionTexture, PbrMetallicRoughness, TextureRef,
};
pub use mesh::{Attribute, Mesh, Primitive, PrimitiveMode};
pub use scene::{Node, Scene};
pub use texture::{Image, ImageKind, Texture};

pub(crate) use file::BufferData;
