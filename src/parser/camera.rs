//! Camera builder

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Camera, OrthographicCamera, PerspectiveCamera};

use super::value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclaredType {
    Perspective,
    Orthographic,
}

fn parse_type(val: &Value) -> Result<DeclaredType> {
    let name = val.as_str().ok_or_else(|| {
        Error::schema(
            "camera",
            format!(
                "field 'type': expected a string, found {}",
                value::kind_name(val)
            ),
        )
    })?;

    match name {
        "perspective" => Ok(DeclaredType::Perspective),
        "orthographic" => Ok(DeclaredType::Orthographic),
        _ => Err(Error::schema(
            "camera",
            format!("unknown camera type '{name}'"),
        )),
    }
}

fn parse_perspective(val: &Value) -> Result<PerspectiveCamera> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "camera",
            format!(
                "field 'perspective': expected an object, found {}",
                value::kind_name(val)
            ),
        )
    })?;

    let mut persp = PerspectiveCamera::default();
    for (key, item) in obj {
        match key.as_str() {
            "aspectRatio" => persp.aspect_ratio = value::as_f32(item, "aspectRatio"),
            "yfov" => persp.yfov = value::as_f32(item, "yfov"),
            "zfar" => persp.zfar = value::as_f32(item, "zfar"),
            "znear" => persp.znear = value::as_f32(item, "znear"),
            _ => log::debug!("camera perspective: unsupported key '{key}'"),
        }
    }

    Ok(persp)
}

fn parse_orthographic(val: &Value) -> Result<OrthographicCamera> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "camera",
            format!(
                "field 'orthographic': expected an object, found {}",
                value::kind_name(val)
            ),
        )
    })?;

    let mut ortho = OrthographicCamera::default();
    for (key, item) in obj {
        match key.as_str() {
            "xmag" => ortho.xmag = value::as_f32(item, "xmag"),
            "ymag" => ortho.ymag = value::as_f32(item, "ymag"),
            "zfar" => ortho.zfar = value::as_f32(item, "zfar"),
            "znear" => ortho.znear = value::as_f32(item, "znear"),
            _ => log::debug!("camera orthographic: unsupported key '{key}'"),
        }
    }

    Ok(ortho)
}

/// Build one camera from its JSON object
///
/// The declared `type` must be present and agree with the sub-blocks:
/// exactly one of `perspective`/`orthographic` may appear, and it must be
/// the declared one.
pub(super) fn parse_camera(val: &Value) -> Result<Camera> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "camera",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut declared = None;
    let mut perspective = None;
    let mut orthographic = None;

    for (key, item) in obj {
        match key.as_str() {
            "type" => declared = Some(parse_type(item)?),
            "perspective" => perspective = Some(parse_perspective(item)?),
            "orthographic" => orthographic = Some(parse_orthographic(item)?),
            _ => log::debug!("camera: unsupported key '{key}'"),
        }
    }

    let declared = declared.ok_or_else(|| Error::missing("camera", "type"))?;
    match (declared, perspective, orthographic) {
        (DeclaredType::Perspective, Some(persp), None) => Ok(Camera::Perspective(persp)),
        (DeclaredType::Orthographic, None, Some(ortho)) => Ok(Camera::Orthographic(ortho)),
        _ => Err(Error::schema(
            "camera",
            "declared type does not match the supplied projection block",
        )),
    }
}
