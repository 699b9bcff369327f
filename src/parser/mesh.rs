//! Mesh and primitive builders

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Attribute, Mesh, Primitive, PrimitiveMode};

use super::value;

fn parse_mode(val: &Value) -> PrimitiveMode {
    let code = value::as_u32(val, "mode");
    PrimitiveMode::from_code(code).unwrap_or_else(|| {
        log::warn!("primitive: unknown mode code {code}, falling back to triangles");
        PrimitiveMode::Triangles
    })
}

fn parse_attributes(val: &Value) -> Result<Vec<Attribute>> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "primitive",
            format!(
                "field 'attributes': expected an object, found {}",
                value::kind_name(val)
            ),
        )
    })?;

    Ok(obj
        .iter()
        .map(|(name, item)| Attribute {
            name: name.clone(),
            accessor: value::as_u32(item, name).into(),
        })
        .collect())
}

/// Build one primitive from its JSON object
pub(super) fn parse_primitive(val: &Value) -> Result<Primitive> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "primitive",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut prim = Primitive::new();
    for (key, item) in obj {
        match key.as_str() {
            "mode" => prim.mode = parse_mode(item),
            "indices" => prim.indices = Some(value::as_u32(item, "indices").into()),
            "material" => prim.material = Some(value::as_u32(item, "material").into()),
            "attributes" => prim.attributes = parse_attributes(item)?,
            _ => log::debug!("primitive: unsupported key '{key}'"),
        }
    }

    Ok(prim)
}

/// Build one mesh from its JSON object
pub(super) fn parse_mesh(val: &Value) -> Result<Mesh> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "mesh",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut mesh = Mesh::new();
    for (key, item) in obj {
        match key.as_str() {
            "primitives" => {
                let items = item.as_array().ok_or_else(|| {
                    Error::schema(
                        "mesh",
                        format!(
                            "field 'primitives': expected an array, found {}",
                            value::kind_name(item)
                        ),
                    )
                })?;
                mesh.primitives = items
                    .iter()
                    .map(parse_primitive)
                    .collect::<Result<Vec<_>>>()?;
            }
            _ => log::debug!("mesh: unsupported key '{key}'"),
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccessorIndex;
    use serde_json::json;

    #[test]
    fn primitive_defaults_to_triangles() {
        let prim = parse_primitive(&json!({})).unwrap();
        assert_eq!(prim.mode, PrimitiveMode::Triangles);
        assert!(prim.indices.is_none());
        assert!(prim.attributes.is_empty());
    }

    #[test]
    fn attributes_preserve_file_order() {
        let prim = parse_primitive(&json!({
            "attributes": { "POSITION": 0, "NORMAL": 1, "TEXCOORD_0": 2 }
        }))
        .unwrap();
        let names: Vec<&str> = prim.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["POSITION", "NORMAL", "TEXCOORD_0"]);
        assert_eq!(prim.attribute("NORMAL"), Some(AccessorIndex(1)));
        assert_eq!(prim.attribute("TANGENT"), None);
    }

    #[test]
    fn non_array_primitives_fail() {
        assert!(parse_mesh(&json!({ "primitives": {} })).is_err());
    }
}
