//! Typed extraction from generic JSON values
//!
//! Scalar extraction fails soft: a wrong-kind value logs an error and yields
//! a zero/empty default so unrelated sibling fields can still be parsed.
//! Fixed-arity array extraction fails hard with a schema error, since an
//! array of the wrong shape cannot be defaulted field-by-field; the caller
//! decides what that means for the enclosing entity.

use serde_json::Value;

use crate::error::{Error, Result};

/// Human-readable JSON kind name for diagnostics
pub(crate) fn kind_name(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Longest string the extractor will keep; longer input is truncated
const MAX_STRING_LEN: usize = 255;

/// Numeric reading of a scalar value: JSON numbers directly, JSON strings by
/// parsing their contents. Everything else is `None`.
fn as_number(val: &Value) -> Option<f64> {
    match val {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Extract an unsigned scalar, yielding 0 on a wrong-kind value
pub(crate) fn as_u32(val: &Value, field: &str) -> u32 {
    match as_number(val) {
        Some(n) => n as u32,
        None => {
            log::error!("field '{field}': expected a number, found {}", kind_name(val));
            0
        }
    }
}

/// Extract a float scalar, yielding 0.0 on a wrong-kind value
pub(crate) fn as_f32(val: &Value, field: &str) -> f32 {
    match as_number(val) {
        Some(n) => n as f32,
        None => {
            log::error!("field '{field}': expected a number, found {}", kind_name(val));
            0.0
        }
    }
}

/// Extract a boolean, yielding `false` on a wrong-kind value
///
/// Accepts a JSON bool or the literal string `"true"`/`"false"`.
pub(crate) fn as_bool(val: &Value, field: &str) -> bool {
    match val {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => {
            log::error!("field '{field}': expected a bool, found {}", kind_name(val));
            false
        }
    }
}

/// Extract a bounded string, yielding an empty string on a wrong-kind value
pub(crate) fn as_string(val: &Value, field: &str) -> String {
    match val {
        Value::String(s) => {
            let mut out = s.clone();
            if out.chars().count() > MAX_STRING_LEN {
                let cut = out
                    .char_indices()
                    .nth(MAX_STRING_LEN)
                    .map(|(pos, _)| pos)
                    .unwrap_or(out.len());
                out.truncate(cut);
            }
            out
        }
        _ => {
            log::error!("field '{field}': expected a string, found {}", kind_name(val));
            String::new()
        }
    }
}

/// Extract exactly `count` floats from a JSON array
pub(crate) fn f32s(
    val: &Value,
    count: usize,
    entity: &'static str,
    field: &str,
) -> Result<Vec<f32>> {
    let items = val.as_array().ok_or_else(|| {
        Error::schema(
            entity,
            format!("field '{field}': expected an array, found {}", kind_name(val)),
        )
    })?;

    if items.len() != count {
        return Err(Error::schema(
            entity,
            format!(
                "field '{field}': expected {count} elements, found {}",
                items.len()
            ),
        ));
    }

    Ok(items.iter().map(|item| as_f32(item, field)).collect())
}

/// Extract a fixed-size float array from a JSON array
pub(crate) fn fixed_f32s<const N: usize>(
    val: &Value,
    entity: &'static str,
    field: &str,
) -> Result<[f32; N]> {
    let items = f32s(val, N, entity, field)?;
    // The length was just checked against N.
    Ok(items.try_into().unwrap_or([0.0; N]))
}
