//! Accessor, buffer view and buffer builders

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Accessor, Buffer, BufferView, ComponentType, ElementKind};

use super::value;

fn parse_element_kind(val: &Value) -> Result<ElementKind> {
    let name = val.as_str().ok_or_else(|| {
        Error::schema(
            "accessor",
            format!(
                "field 'type': expected a string, found {}",
                value::kind_name(val)
            ),
        )
    })?;
    ElementKind::from_name(name)
        .ok_or_else(|| Error::schema("accessor", format!("unknown element type '{name}'")))
}

fn parse_component_type(val: &Value) -> Result<ComponentType> {
    let code = value::as_u32(val, "componentType");
    ComponentType::from_code(code).ok_or_else(|| {
        Error::schema(
            "accessor",
            format!("unknown componentType code {code:#06x}"),
        )
    })
}

/// Decode a min/max bounds array once the element shape and component type
/// are known. Bounds are only honored for float components on non-matrix
/// shapes; everything else is dropped.
fn parse_bounds(
    val: &Value,
    kind: ElementKind,
    component_type: ComponentType,
    field: &str,
) -> Result<Option<Vec<f32>>> {
    let Some(arity) = kind.bounds_arity() else {
        log::debug!("accessor: '{field}' ignored for matrix element shapes");
        return Ok(None);
    };
    if component_type != ComponentType::Float {
        log::debug!("accessor: '{field}' ignored for non-float component type");
        return Ok(None);
    }
    value::f32s(val, arity, "accessor", field).map(Some)
}

/// Build one accessor from its JSON object
///
/// `type`, `componentType` and `count` are required. The `min`/`max` values
/// are stashed during the walk and decoded afterwards, since they can only
/// be interpreted once the element shape and component type are both known
/// and the file may order the keys either way.
pub(super) fn parse_accessor(val: &Value) -> Result<Accessor> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "accessor",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut buffer_view = None;
    let mut byte_offset = 0;
    let mut kind = None;
    let mut component_type = None;
    let mut count = None;
    let mut min_val = None;
    let mut max_val = None;

    for (key, item) in obj {
        match key.as_str() {
            "bufferView" => buffer_view = Some(value::as_u32(item, key).into()),
            "byteOffset" => byte_offset = value::as_u32(item, key),
            "type" => kind = Some(parse_element_kind(item)?),
            "componentType" => component_type = Some(parse_component_type(item)?),
            "count" => count = Some(value::as_u32(item, key)),
            "min" => min_val = Some(item),
            "max" => max_val = Some(item),
            _ => log::debug!("accessor: unsupported key '{key}'"),
        }
    }

    let kind = kind.ok_or_else(|| Error::missing("accessor", "type"))?;
    let component_type = component_type.ok_or_else(|| Error::missing("accessor", "componentType"))?;
    let count = count.ok_or_else(|| Error::missing("accessor", "count"))?;

    let min = match min_val {
        Some(item) => parse_bounds(item, kind, component_type, "min")?,
        None => None,
    };
    let max = match max_val {
        Some(item) => parse_bounds(item, kind, component_type, "max")?,
        None => None,
    };

    Ok(Accessor {
        buffer_view,
        byte_offset,
        kind,
        component_type,
        count,
        min,
        max,
    })
}

/// Build one buffer view from its JSON object
///
/// `buffer` and `byteLength` are required.
pub(super) fn parse_buffer_view(val: &Value) -> Result<BufferView> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "bufferView",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut buffer = None;
    let mut byte_offset = 0;
    let mut byte_length = None;
    let mut byte_stride = None;

    for (key, item) in obj {
        match key.as_str() {
            "buffer" => buffer = Some(value::as_u32(item, key).into()),
            "byteOffset" => byte_offset = value::as_u32(item, key),
            "byteLength" => byte_length = Some(value::as_u32(item, key)),
            "byteStride" => byte_stride = Some(value::as_u32(item, key)),
            _ => log::debug!("bufferView: unsupported key '{key}'"),
        }
    }

    Ok(BufferView {
        buffer: buffer.ok_or_else(|| Error::missing("bufferView", "buffer"))?,
        byte_offset,
        byte_length: byte_length.ok_or_else(|| Error::missing("bufferView", "byteLength"))?,
        byte_stride,
    })
}

/// Build one buffer from its JSON object
///
/// `byteLength` is required; the bytes themselves live in the BIN chunk.
pub(super) fn parse_buffer(val: &Value) -> Result<Buffer> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "buffer",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut byte_length = None;
    for (key, item) in obj {
        match key.as_str() {
            "byteLength" => byte_length = Some(value::as_u32(item, key)),
            _ => log::debug!("buffer: unsupported key '{key}'"),
        }
    }

    Ok(Buffer {
        byte_length: byte_length.ok_or_else(|| Error::missing("buffer", "byteLength"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BufferViewIndex;
    use serde_json::json;

    #[test]
    fn accessor_requires_type_component_type_and_count() {
        let full = json!({
            "bufferView": 1,
            "type": "VEC3",
            "componentType": 5126,
            "count": 24
        });
        let acc = parse_accessor(&full).unwrap();
        assert_eq!(acc.buffer_view, Some(BufferViewIndex(1)));
        assert_eq!(acc.kind, ElementKind::Vec3);
        assert_eq!(acc.component_type, ComponentType::Float);
        assert_eq!(acc.count, 24);
        assert_eq!(acc.byte_offset, 0);

        for missing in ["type", "componentType", "count"] {
            let mut obj = full.clone();
            obj.as_object_mut().unwrap().remove(missing);
            assert!(parse_accessor(&obj).is_err(), "should fail without {missing}");
        }
    }

    #[test]
    fn float_bounds_are_read_even_when_keys_precede_type() {
        let acc = parse_accessor(&json!({
            "min": [0.0, -1.0, 0.0],
            "max": [1.0, 1.0, 2.0],
            "type": "VEC3",
            "componentType": 5126,
            "count": 3
        }))
        .unwrap();
        assert_eq!(acc.min.unwrap(), [0.0, -1.0, 0.0]);
        assert_eq!(acc.max.unwrap(), [1.0, 1.0, 2.0]);
    }

    #[test]
    fn integer_bounds_are_dropped() {
        let acc = parse_accessor(&json!({
            "type": "SCALAR",
            "componentType": 5123,
            "count": 36,
            "min": [0],
            "max": [23]
        }))
        .unwrap();
        assert!(acc.min.is_none());
        assert!(acc.max.is_none());
    }

    #[test]
    fn matrix_shapes_never_carry_bounds() {
        let acc = parse_accessor(&json!({
            "type": "MAT4",
            "componentType": 5126,
            "count": 2,
            "min": [0.0]
        }))
        .unwrap();
        assert!(acc.min.is_none());
    }

    #[test]
    fn unknown_component_type_fails() {
        let result = parse_accessor(&json!({
            "type": "SCALAR",
            "componentType": 9999,
            "count": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn buffer_view_requires_buffer_and_byte_length() {
        assert!(parse_buffer_view(&json!({ "buffer": 0 })).is_err());
        assert!(parse_buffer_view(&json!({ "byteLength": 16 })).is_err());

        let view = parse_buffer_view(&json!({
            "buffer": 0,
            "byteLength": 16,
            "byteStride": 12
        }))
        .unwrap();
        assert_eq!(view.byte_offset, 0);
        assert_eq!(view.byte_stride, Some(12));
    }

    #[test]
    fn buffer_requires_byte_length() {
        assert!(parse_buffer(&json!({})).is_err());
        assert_eq!(parse_buffer(&json!({ "byteLength": 8 })).unwrap().byte_length, 8);
    }
}
