use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Startup display toggles.
///
/// These seed the viewer's runtime flags; the keyboard toggles mutate the
/// runtime copy, not the options. Texturing only takes effect while solid
/// mode is on — see
/// [`Viewer::effective_texture`](crate::viewer::Viewer::effective_texture).
pub struct DisplayOptions {
    /// Render filled polygons (`false` = wireframe).
    pub show_solid: bool,
    /// Apply textures to solid surfaces.
    pub show_texture: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_solid: true,
            show_texture: true,
        }
    }
}
