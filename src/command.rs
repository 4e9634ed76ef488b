//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, or programmatic call — is represented as a [`ViewerCommand`].
//! The viewer loop never cares *how* a command was triggered; keyboard,
//! mouse, and API all look identical by the time they reach
//! [`Viewer::execute`](crate::viewer::Viewer::execute).

/// A discrete or parameterized operation the viewer can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the model by a mouse drag (raw pixel deltas; the camera maps
    /// them to degrees).
    Rotate {
        /// Horizontal drag delta in pixels.
        dx: i32,
        /// Vertical drag delta in pixels.
        dy: i32,
    },

    /// Pan the camera by a mouse drag. `dx` already carries the negated
    /// horizontal delta (drag right moves the scene, not the eye).
    Pan {
        /// Negated horizontal drag delta in pixels.
        dx: i32,
        /// Vertical drag delta in pixels.
        dy: i32,
    },

    /// Zoom by a scroll-wheel delta (positive = toward the model).
    Zoom {
        /// Wheel clicks.
        delta: i32,
    },

    /// Roll the camera's up vector by the given degrees.
    Roll {
        /// Signed roll angle in degrees.
        degrees: f32,
    },

    /// Restore camera and orientation to their startup state.
    ResetView,

    // ── Display ─────────────────────────────────────────────────────
    /// Flip solid (filled) versus wireframe rendering.
    ToggleSolid,

    /// Flip the user's texturing preference. Only effective while solid
    /// mode is on; the preference itself survives solid toggles.
    ToggleTexture,

    /// Viewport dimensions changed.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },

    // ── Lifecycle ───────────────────────────────────────────────────
    /// Stop the viewer loop after the current frame.
    Quit,
}
