//! GLB decode pipeline
//!
//! [`decode`] drives the whole build: container framing, JSON
//! tokenization, then one dispatch pass over the top-level object that hands
//! each recognized key to its array-of-entities builder. Builders are
//! all-or-nothing: the first failure anywhere propagates out and every
//! entity accumulated so far is dropped, so a [`GlbFile`] either exists in
//! full or not at all.

mod accessor;
mod camera;
mod material;
mod mesh;
mod scene;
mod texture;
pub(crate) mod value;

use serde_json::Value;

use crate::container;
use crate::error::{Error, Result};
use crate::model::{BufferData, GlbFile};

/// Parse a JSON array of entities, one builder call per element
fn parse_array<T>(
    val: &Value,
    entity: &'static str,
    build: impl Fn(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    let items = val.as_array().ok_or_else(|| {
        Error::schema(
            entity,
            format!("expected an array, found {}", value::kind_name(val)),
        )
    })?;
    items.iter().map(build).collect()
}

/// Decode a complete GLB container into a file model
pub(crate) fn decode(data: BufferData<'_>) -> Result<GlbFile<'_>> {
    let frames = container::split(data.bytes())?;
    let root: Value = serde_json::from_slice(&data.bytes()[frames.json.clone()])?;

    let doc = root.as_object().ok_or_else(|| {
        Error::schema(
            "document",
            format!(
                "top-level JSON is {}, expected an object",
                value::kind_name(&root)
            ),
        )
    })?;

    let mut file = GlbFile {
        data,
        bin: frames.bin,
        scene: None,
        scenes: Vec::new(),
        nodes: Vec::new(),
        cameras: Vec::new(),
        meshes: Vec::new(),
        materials: Vec::new(),
        accessors: Vec::new(),
        textures: Vec::new(),
        buffer_views: Vec::new(),
        images: Vec::new(),
        buffers: Vec::new(),
    };

    for (key, val) in doc {
        match key.as_str() {
            "scene" => file.scene = Some(scene::parse_default_scene(val)?),
            "scenes" => file.scenes = parse_array(val, "scenes", scene::parse_scene)?,
            "nodes" => file.nodes = parse_array(val, "nodes", scene::parse_node)?,
            "cameras" => file.cameras = parse_array(val, "cameras", camera::parse_camera)?,
            "meshes" => file.meshes = parse_array(val, "meshes", mesh::parse_mesh)?,
            "materials" => {
                file.materials = parse_array(val, "materials", material::parse_material)?;
            }
            "accessors" => {
                file.accessors = parse_array(val, "accessors", accessor::parse_accessor)?;
            }
            "textures" => file.textures = parse_array(val, "textures", texture::parse_texture)?,
            "bufferViews" => {
                file.buffer_views = parse_array(val, "bufferViews", accessor::parse_buffer_view)?;
            }
            "images" => file.images = parse_array(val, "images", texture::parse_image)?,
            "buffers" => file.buffers = parse_array(val, "buffers", accessor::parse_buffer)?,
            _ => log::debug!("document: unsupported key '{key}'"),
        }
    }

    Ok(file)
}
