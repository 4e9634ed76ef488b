//! The external render/present surface.

use crate::camera::{Projection, ViewParams};
use crate::math::Vector3;
use crate::model::Model;

/// Everything the renderer needs to draw one frame.
///
/// Produced by the viewer loop after the orientation resolve step; consumed
/// exactly once per frame by [`DisplaySurface::draw_frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Look-at parameters for the camera.
    pub view: ViewParams,
    /// Resolved rotation angle in degrees.
    pub rotation_angle: f32,
    /// Resolved unit rotation axis.
    pub rotation_axis: Vector3,
    /// Model-centering translation (`-center / scale`).
    pub model_offset: Vector3,
    /// Render filled polygons (`false` = wireframe).
    pub solid: bool,
    /// Effective texturing flag: the user's preference AND solid mode.
    pub textured: bool,
}

/// A display surface the viewer renders to.
///
/// Implemented by the host's rendering backend. The projection is pushed
/// only when it changes (startup and resize); view and orientation arrive
/// with every frame. [`present`](Self::present) may block on vertical sync
/// and is the loop's only scheduling point.
pub trait DisplaySurface {
    /// Apply new projection parameters (startup and after each resize).
    fn set_projection(&mut self, projection: &Projection);

    /// Draw one frame of the given model with the given parameters.
    fn draw_frame(&mut self, frame: &FrameParams, model: &dyn Model);

    /// Present the drawn frame; may block until the display is ready.
    fn present(&mut self);
}
