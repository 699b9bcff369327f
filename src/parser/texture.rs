//! Texture and image builders

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Image, ImageKind, Texture};

use super::value;

/// Build one texture from its JSON object
pub(super) fn parse_texture(val: &Value) -> Result<Texture> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "texture",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut texture = Texture::default();
    for (key, item) in obj {
        match key.as_str() {
            "source" => texture.source = Some(value::as_u32(item, key).into()),
            _ => log::debug!("texture: unsupported key '{key}'"),
        }
    }

    Ok(texture)
}

fn parse_mime_type(val: &Value) -> ImageKind {
    match val.as_str() {
        Some(mime) => {
            let kind = ImageKind::from_mime(mime);
            if kind == ImageKind::Unknown {
                log::warn!("image: unrecognized MIME type '{mime}'");
            }
            kind
        }
        None => {
            log::error!(
                "field 'mimeType': expected a string, found {}",
                value::kind_name(val)
            );
            ImageKind::Unknown
        }
    }
}

/// Build one image from its JSON object
///
/// An unrecognized MIME type maps to [`ImageKind::Unknown`] and is not
/// fatal.
pub(super) fn parse_image(val: &Value) -> Result<Image> {
    let obj = val.as_object().ok_or_else(|| {
        Error::schema(
            "image",
            format!("expected an object, found {}", value::kind_name(val)),
        )
    })?;

    let mut image = Image::default();
    for (key, item) in obj {
        match key.as_str() {
            "bufferView" => image.buffer_view = Some(value::as_u32(item, key).into()),
            "mimeType" => image.kind = parse_mime_type(item),
            _ => log::debug!("image: unsupported key '{key}'"),
        }
    }

    Ok(image)
}
