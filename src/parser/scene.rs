//! Scene and node builders

use glam::{Mat4, Quat, Vec3};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Node, NodeIndex, Scene, SceneIndex};

use super::value;

/// Parse the top-level `scene` key naming the default scene
///
/// Unlike the soft scalar extractor, a wrong-kind value here fails the
/// decode: a document that names a default scene but cannot be read does not
/// have a usable default.
pub(super) fn parse_default_scene(val: &Value) -> Result<SceneIndex> {
    if !matches!(val, Value::Number(_) | Value::String(_)) {
        return Err(Error::schema(
            "document",
            format!(
                "field 'scene': expected a number, found {}",
                value::kind_name(val)
            ),
        ));
    }
    Ok(SceneIndex(value::as_u32(val, "scene")))
}

/// Parse an array of node references (scene roots or node children)
fn parse_node_refs(val: &Value, entity: &'static str, field: &str) -> Result<Vec<NodeIndex>> {
    let items = val.as_array().ok_or_else(|| {
        Error::schema(
            entity,
            format!(
                "field '{field}': expected an array, found {}",
                value::kind_name(val)
            ),
        )
    })?;

    Ok(items
        .iter()
        .map(|item| NodeIndex(value::as_u32(item, field)))
        .collect())
}

/// Build one scene from its JSON object
pub(super) fn parse_scene(val: &Value) -> Result<Scene> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "scene",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut scene = Scene::new();
    for (key, item) in obj {
        match key.as_str() {
            "name" => scene.name = value::as_string(item, "name"),
            "nodes" => scene.nodes = parse_node_refs(item, "scene", "nodes")?,
            _ => log::debug!("scene: unsupported key '{key}'"),
        }
    }

    Ok(scene)
}

/// Build one node from its JSON object
///
/// The local transform is composed after the key walk as
/// `matrix * translation * rotation * scale`; each factor defaults to
/// identity when its key is absent.
pub(super) fn parse_node(val: &Value) -> Result<Node> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "node",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut node = Node::new();
    let mut base = Mat4::IDENTITY;
    let mut translation = Mat4::IDENTITY;
    let mut rotation = Mat4::IDENTITY;
    let mut scale = Mat4::IDENTITY;

    for (key, item) in obj {
        match key.as_str() {
            "name" => node.name = value::as_string(item, "name"),
            "mesh" => node.mesh = Some(value::as_u32(item, "mesh").into()),
            "camera" => node.camera = Some(value::as_u32(item, "camera").into()),
            "children" => node.children = parse_node_refs(item, "node", "children")?,
            "matrix" => {
                let m = value::fixed_f32s::<16>(item, "node", "matrix")?;
                base = Mat4::from_cols_array(&m);
            }
            "translation" => {
                let t = value::fixed_f32s::<3>(item, "node", "translation")?;
                translation = Mat4::from_translation(Vec3::from_array(t));
            }
            "rotation" => {
                let r = value::fixed_f32s::<4>(item, "node", "rotation")?;
                rotation = Mat4::from_quat(Quat::from_xyzw(r[0], r[1], r[2], r[3]));
            }
            "scale" => {
                let s = value::fixed_f32s::<3>(item, "node", "scale")?;
                scale = Mat4::from_scale(Vec3::from_array(s));
            }
            _ => log::debug!("node: unsupported key '{key}'"),
        }
    }

    node.matrix = base * translation * rotation * scale;
    Ok(node)
}
