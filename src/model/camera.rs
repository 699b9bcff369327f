//! Camera types

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerspectiveCamera {
    /// Aspect ratio of the field of view (0.0 when absent)
    pub aspect_ratio: f32,
    /// Vertical field of view in radians
    pub yfov: f32,
    /// Far clipping plane distance (0.0 when absent, meaning infinite)
    pub zfar: f32,
    /// Near clipping plane distance
    pub znear: f32,
}

/// Orthographic projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrthographicCamera {
    /// Horizontal magnification
    pub xmag: f32,
    /// Vertical magnification
    pub ymag: f32,
    /// Far clipping plane distance
    pub zfar: f32,
    /// Near clipping plane distance
    pub znear: f32,
}

/// A camera: exactly one of the two projection kinds
///
/// The JSON form declares a `type` string and a sub-block per kind; the two
/// must agree, so the decoded form is a plain tagged union with no separate
/// type field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Camera {
    /// Perspective projection
    Perspective(PerspectiveCamera),
    /// Orthographic projection
    Orthographic(OrthographicCamera),
}
