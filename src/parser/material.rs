//! Material builders

use glam::{Vec3, Vec4};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{
    AlphaMode, Material, NormalTexture, OcclusionTexture, PbrMetallicRoughness, TextureRef,
};

use super::value;

/// Parse a texture reference block (`index` required, `texCoord` optional)
///
/// `extra` receives keys the plain reference does not know, so the normal
/// and occlusion wrappers can pick up their `scale`/`strength` fields from
/// the same object walk.
fn parse_texture_ref(
    val: &Value,
    entity: &'static str,
    mut extra: impl FnMut(&str, &Value) -> bool,
) -> Result<TextureRef> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            entity,
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut index = None;
    let mut tex_coord = 0;
    for (key, item) in obj {
        match key.as_str() {
            "index" => index = Some(value::as_u32(item, "index").into()),
            "texCoord" => tex_coord = value::as_u32(item, "texCoord"),
            _ => {
                if !extra(key, item) {
                    log::debug!("{entity}: unsupported key '{key}'");
                }
            }
        }
    }

    let index = index.ok_or_else(|| Error::missing(entity, "index"))?;
    Ok(TextureRef { index, tex_coord })
}

fn parse_pbr(val: &Value) -> Result<PbrMetallicRoughness> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "pbrMetallicRoughness",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut pbr = PbrMetallicRoughness::default();
    for (key, item) in obj {
        match key.as_str() {
            "baseColorFactor" => {
                let rgba = value::fixed_f32s::<4>(item, "pbrMetallicRoughness", key)?;
                pbr.base_color_factor = Vec4::from_array(rgba);
            }
            "baseColorTexture" => {
                pbr.base_color_texture =
                    Some(parse_texture_ref(item, "baseColorTexture", |_, _| false)?);
            }
            "metallicFactor" => pbr.metallic_factor = value::as_f32(item, key),
            "roughnessFactor" => pbr.roughness_factor = value::as_f32(item, key),
            "metallicRoughnessTexture" => {
                pbr.metallic_roughness_texture = Some(parse_texture_ref(
                    item,
                    "metallicRoughnessTexture",
                    |_, _| false,
                )?);
            }
            _ => log::debug!("pbrMetallicRoughness: unsupported key '{key}'"),
        }
    }

    Ok(pbr)
}

fn parse_normal_texture(val: &Value) -> Result<NormalTexture> {
    let mut scale = 1.0;
    let texture = parse_texture_ref(val, "normalTexture", |key, item| {
        if key == "scale" {
            scale = value::as_f32(item, "scale");
            true
        } else {
            false
        }
    })?;
    Ok(NormalTexture { texture, scale })
}

fn parse_occlusion_texture(val: &Value) -> Result<OcclusionTexture> {
    let mut strength = 1.0;
    let texture = parse_texture_ref(val, "occlusionTexture", |key, item| {
        if key == "strength" {
            strength = value::as_f32(item, "strength");
            true
        } else {
            false
        }
    })?;
    Ok(OcclusionTexture { texture, strength })
}

fn parse_alpha_mode(val: &Value, current: AlphaMode) -> AlphaMode {
    match val.as_str() {
        Some("OPAQUE") => AlphaMode::Opaque,
        Some("BLEND") => AlphaMode::Blend,
        Some(other) => {
            log::warn!("material: unknown alphaMode '{other}', falling back to blend");
            AlphaMode::Blend
        }
        None => {
            log::error!(
                "field 'alphaMode': expected a string, found {}",
                value::kind_name(val)
            );
            current
        }
    }
}

/// Build one material from its JSON object
pub(super) fn parse_material(val: &Value) -> Result<Material> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "material",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut material = Material::new();
    for (key, item) in obj {
        match key.as_str() {
            "pbrMetallicRoughness" => material.pbr_metallic_roughness = parse_pbr(item)?,
            "normalTexture" => material.normal_texture = Some(parse_normal_texture(item)?),
            "occlusionTexture" => {
                material.occlusion_texture = Some(parse_occlusion_texture(item)?);
            }
            "emissiveTexture" => {
                material.emissive_texture =
                    Some(parse_texture_ref(item, "emissiveTexture", |_, _| false)?);
            }
            "emissiveFactor" => {
                let rgb = value::fixed_f32s::<3>(item, "material", key)?;
                material.emissive_factor = Vec3::from_array(rgb);
            }
            "alphaMode" => material.alpha_mode = parse_alpha_mode(item, material.alpha_mode),
            "doubleSided" => material.double_sided = value::as_bool(item, key),
            _ => log::debug!("material: unsupported key '{key}'"),
        }
    }

    Ok(material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextureIndex;
    use serde_json::json;

    #[test]
    fn empty_material_gets_defaults() {
        let mat = parse_material(&json!({})).unwrap();
        assert_eq!(mat.pbr_metallic_roughness.base_color_factor, Vec4::ONE);
        assert_eq!(mat.pbr_metallic_roughness.metallic_factor, 1.0);
        assert_eq!(mat.pbr_metallic_roughness.roughness_factor, 1.0);
        assert_eq!(mat.emissive_factor, Vec3::ZERO);
        assert_eq!(mat.alpha_mode, AlphaMode::Opaque);
        assert!(!mat.double_sided);
    }

    #[test]
    fn unknown_alpha_mode_falls_back_to_blend() {
        let mat = parse_material(&json!({ "alphaMode": "MASK" })).unwrap();
        assert_eq!(mat.alpha_mode, AlphaMode::Blend);
    }

    #[test]
    fn non_string_alpha_mode_keeps_default() {
        let mat = parse_material(&json!({ "alphaMode": 3 })).unwrap();
        assert_eq!(mat.alpha_mode, AlphaMode::Opaque);
    }

    #[test]
    fn normal_texture_scale_and_index() {
        let mat = parse_material(&json!({
            "normalTexture": { "index": 2, "texCoord": 1, "scale": 0.5 }
        }))
        .unwrap();
        let normal = mat.normal_texture.unwrap();
        assert_eq!(normal.texture.index, TextureIndex(2));
        assert_eq!(normal.texture.tex_coord, 1);
        assert_eq!(normal.scale, 0.5);
    }

    #[test]
    fn occlusion_strength_defaults_to_one() {
        let mat = parse_material(&json!({
            "occlusionTexture": { "index": 0 }
        }))
        .unwrap();
        assert_eq!(mat.occlusion_texture.unwrap().strength, 1.0);
    }

    #[test]
    fn texture_ref_without_index_fails() {
        assert!(parse_material(&json!({ "emissiveTexture": {} })).is_err());
    }

    #[test]
    fn malformed_base_color_factor_fails() {
        let result = parse_material(&json!({
            "pbrMetallicRoughness": { "baseColorFactor": [1.0, 1.0] }
        }));
        assert!(result.is_err());
    }
}
