//! Texture and image types

use super::index::{BufferViewIndex, ImageIndex};

/// Encoded image format, mapped from the image's MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageKind {
    /// Unrecognized or absent MIME type
    #[default]
    Unknown,
    /// image/png
    Png,
    /// image/jpeg
    Jpeg,
}

impl ImageKind {
    /// Map a MIME type string; anything unrecognized is `Unknown`, not an
    /// error
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "image/png" => ImageKind::Png,
            "image/jpeg" => ImageKind::Jpeg,
            _ => ImageKind::Unknown,
        }
    }
}

/// A texture: a reference to its source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Texture {
    /// Source image, if any
    pub source: Option<ImageIndex>,
}

/// An image embedded in the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Image {
    /// Buffer view holding the encoded image bytes, if embedded
    pub buffer_view: Option<BufferViewIndex>,
    /// Encoded format
    pub kind: ImageKind,
}
