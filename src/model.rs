//! The external geometry provider.

use std::path::PathBuf;

use crate::math::Vector3;

/// A loaded, renderable surface model.
///
/// Implemented by the host's geometry loader; the viewer core never parses
/// files or uploads geometry itself. It consumes the model's center and
/// scale to compute the render-time centering translation, and forwards
/// [`draw`](Self::draw) calls with the effective texture flag.
pub trait Model {
    /// Issue the model's draw call, with or without texturing.
    fn draw(&self, with_texture: bool);

    /// Geometric center of the model in its own coordinate space.
    fn center(&self) -> Vector3;

    /// Uniform scale factor of the model (positive for a valid model).
    fn scale(&self) -> f32;

    /// Whether the model requests smooth shading.
    fn is_smooth(&self) -> bool;

    /// Texture image paths the host should load before rendering.
    fn texture_files(&self) -> Vec<PathBuf>;
}
