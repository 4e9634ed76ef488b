//! View/projection state and the mouse-delta → camera-motion mapping.
//!
//! The [`Camera`] converts 2D pixel deltas into pan offsets, zoom offsets,
//! and candidate rotation angles, and exposes the parameters a renderer
//! needs for its look-at and perspective transforms. It never touches the
//! rendering backend itself.

use glam::Mat4;

use crate::math::Vector3;
use crate::options::CameraOptions;

/// Perspective projection parameters, recomputed whenever the field of
/// view, viewport, or clip planes change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Build the perspective matrix for renderers that consume matrices
    /// rather than raw parameters.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

/// Look-at parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Eye (camera) position in world space.
    pub eye: Vector3,
    /// Focus point looked at (`eye + center` direction).
    pub focus: Vector3,
    /// Up direction vector (not necessarily unit length).
    pub up: Vector3,
}

impl ViewParams {
    /// Build the look-at matrix for renderers that consume matrices.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye.into(), self.focus.into(), self.up.into())
    }
}

/// Camera owning eye position, look direction, clip planes, and the
/// pixel-delta mappings for pan, zoom, and rotation.
///
/// Note the glossary distinction: `center` is the *direction* from the eye
/// to the look-at focus, not the focus point itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vector3,
    /// Direction from the eye to the look-at focus point.
    pub center: Vector3,
    /// Up direction; rolled within the camera's local XY plane.
    pub up: Vector3,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// World units of eye motion per scroll-wheel click.
    pub zoom_sensitivity: f32,
    width: u32,
    height: u32,
    /// Construction-time values restored by [`reset`](Self::reset).
    defaults: CameraOptions,
}

/// Viewport dimensions at startup, before the first resize event arrives.
const DEFAULT_VIEWPORT: (u32, u32) = (400, 300);

impl Camera {
    /// Create a camera at the origin looking down −Z with the given
    /// projection and sensitivity options.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        let mut camera = Self {
            eye: Vector3::ZERO,
            center: -Vector3::Z,
            up: Vector3::Y,
            znear: options.znear,
            zfar: options.zfar,
            fovy: options.fovy,
            zoom_sensitivity: options.zoom_sensitivity,
            width: DEFAULT_VIEWPORT.0,
            height: DEFAULT_VIEWPORT.1,
            defaults: options,
        };
        camera.reset();
        camera
    }

    /// Restore every view field to its construction-time value.
    ///
    /// Viewport dimensions are deliberately kept: resetting the view must
    /// not forget how large the window currently is.
    pub fn reset(&mut self) {
        self.eye = Vector3::ZERO;
        self.center = -Vector3::Z;
        self.up = Vector3::Y;
        self.znear = self.defaults.znear;
        self.zfar = self.defaults.zfar;
        self.fovy = self.defaults.fovy;
        self.zoom_sensitivity = self.defaults.zoom_sensitivity;
    }

    /// Store new viewport dimensions.
    ///
    /// Dimensions are clamped to at least one pixel so the aspect ratio and
    /// the pan/rotation divisions stay defined even if a window system
    /// reports a zero-sized surface mid-minimize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Current viewport width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current viewport height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Projection parameters for the current state.
    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection {
            fovy: self.fovy,
            aspect: self.width as f32 / self.height as f32,
            znear: self.znear,
            zfar: self.zfar,
        }
    }

    /// Look-at parameters for the current state. Pure; callable any number
    /// of times per frame.
    #[must_use]
    pub fn view(&self) -> ViewParams {
        ViewParams {
            eye: self.eye,
            focus: self.eye + self.center,
            up: self.up,
        }
    }

    /// Translate the eye by a screen-space drag.
    ///
    /// Offsets are viewport-resolution-relative: a full-width drag moves
    /// the eye one world unit, so dragging across a larger window produces
    /// proportionally smaller per-pixel movement. Sign convention: the
    /// caller negates the raw horizontal mouse delta (see
    /// [`InputProcessor`](crate::input::InputProcessor)).
    pub fn pan(&mut self, delta_x: i32, delta_y: i32) {
        self.eye.x += delta_x as f32 / self.width as f32;
        self.eye.y += delta_y as f32 / self.height as f32;
    }

    /// Move the eye along Z by a scroll-wheel delta.
    ///
    /// Unclamped in both directions; zooming far enough to cross the
    /// near/far planes clips the model. Known limitation carried over from
    /// the viewer this core parameterizes.
    pub fn zoom(&mut self, delta_z: i32) {
        self.eye.z += delta_z as f32 * self.zoom_sensitivity;
    }

    /// Map a pixel delta to a candidate rotation angle in degrees.
    ///
    /// Vertical mouse motion rotates about [`Vector3::X`] (scaled by
    /// viewport height), horizontal motion about [`Vector3::Y`] (scaled by
    /// width); any other axis yields zero. The ratio is clamped to the
    /// arcsine domain, so deltas larger than the viewport saturate at ±90°
    /// instead of faulting.
    #[must_use]
    pub fn rotation_angle_for(&self, pixel_delta: i32, axis: Vector3) -> f32 {
        let dimension = if axis == Vector3::X {
            self.height
        } else if axis == Vector3::Y {
            self.width
        } else {
            return 0.0;
        };
        let ratio = pixel_delta as f32 / dimension as f32;
        ratio.clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Rotate the up vector by `degrees` within the camera's local XY
    /// plane.
    ///
    /// Only `up.x`/`up.y` participate; this approximates true roll and is
    /// valid while `up` stays near the XY plane.
    pub fn roll(&mut self, degrees: f32) {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let x = self.up.x;
        let y = self.up.y;
        self.up.x = x * cos - y * sin;
        self.up.y = y * cos + x * sin;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraOptions::default())
    }
}
