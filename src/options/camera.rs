use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees, in (0, 180).
    pub fovy: f32,
    /// Near clipping plane distance (positive, less than `zfar`).
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// World units of eye motion per scroll-wheel click.
    pub zoom_sensitivity: f32,
    /// Degrees of up-vector roll per key press.
    pub roll_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 1.0,
            zfar: 100.0,
            zoom_sensitivity: 0.1,
            roll_step: 5.0,
        }
    }
}
