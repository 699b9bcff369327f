//! Material types (PBR metallic-roughness parameterization)

use glam::{Vec3, Vec4};

use super::index::TextureIndex;

/// How a material's alpha channel is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Alpha is ignored; the surface is fully opaque
    #[default]
    Opaque,
    /// Alpha blends the surface with the background
    Blend,
}

/// A reference from a material to a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRef {
    /// The referenced texture
    pub index: TextureIndex,
    /// Which TEXCOORD attribute set to sample with (0 when absent)
    pub tex_coord: u32,
}

/// The PBR metallic-roughness block
#[derive(Debug, Clone, PartialEq)]
pub struct PbrMetallicRoughness {
    /// Base color multiplier (opaque white when absent)
    pub base_color_factor: Vec4,
    /// Base color texture, if any
    pub base_color_texture: Option<TextureRef>,
    /// Metalness multiplier (1.0 when absent)
    pub metallic_factor: f32,
    /// Roughness multiplier (1.0 when absent)
    pub roughness_factor: f32,
    /// Combined metallic-roughness texture, if any
    pub metallic_roughness_texture: Option<TextureRef>,
}

impl Default for PbrMetallicRoughness {
    fn default() -> Self {
        Self {
            base_color_factor: Vec4::ONE,
            base_color_texture: None,
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            metallic_roughness_texture: None,
        }
    }
}

/// A tangent-space normal map reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalTexture {
    /// The texture reference
    pub texture: TextureRef,
    /// Normal strength multiplier (1.0 when absent)
    pub scale: f32,
}

/// An ambient-occlusion map reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OcclusionTexture {
    /// The texture reference
    pub texture: TextureRef,
    /// Occlusion strength multiplier (1.0 when absent)
    pub strength: f32,
}

/// A surface material
///
/// Every field has a defined default so a material JSON object with no keys
/// at all still decodes to a sensible opaque white surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    /// PBR metallic-roughness parameters
    pub pbr_metallic_roughness: PbrMetallicRoughness,
    /// Normal map, if any
    pub normal_texture: Option<NormalTexture>,
    /// Occlusion map, if any
    pub occlusion_texture: Option<OcclusionTexture>,
    /// Emissive texture, if any
    pub emissive_texture: Option<TextureRef>,
    /// Emissive color (black when absent)
    pub emissive_factor: Vec3,
    /// Alpha interpretation (opaque when absent)
    pub alpha_mode: AlphaMode,
    /// Whether back faces are rendered
    pub double_sided: bool,
}

impl Material {
    /// Create a material with all defaults
    pub fn new() -> Self {
        Self::default()
    }
}
