//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns the key-binding map and the drag-gesture
//! interpretation (left drag rotates, shift-left drag pans). It is the only
//! thing that sits between raw events and
//! [`Viewer::execute`](crate::viewer::Viewer::execute).

use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::command::ViewerCommand;
use crate::options::KeybindingOptions;

/// Viewer-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_solid = "KeyZ"
/// reset_view = "KeyX"
/// ```
///
/// Only *discrete* actions make sense as key bindings — parameterized
/// commands like [`ViewerCommand::Rotate`] are produced by the mouse
/// gesture interpreter, not key lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum KeyAction {
    Quit,
    ResetView,
    ToggleSolid,
    ToggleTexture,
    RollLeft,
    RollRight,
}

/// Converts raw input events into [`ViewerCommand`]s.
pub struct InputProcessor {
    /// Key string → action mapping.
    keybindings: KeybindingOptions,
    /// Degrees of roll per key press.
    roll_step: f32,
}

impl InputProcessor {
    /// Create a processor with the given bindings and per-press roll step.
    #[must_use]
    pub fn new(keybindings: KeybindingOptions, roll_step: f32) -> Self {
        Self {
            keybindings,
            roll_step,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Convert one raw event into at most one command.
    ///
    /// Pan deltas negate the raw horizontal motion so that dragging right
    /// moves the scene right (the eye moves left); vertical motion passes
    /// through unchanged. Unbound keys and motion without the left button
    /// produce nothing.
    #[must_use]
    pub fn handle_event(&self, event: &InputEvent) -> Option<ViewerCommand> {
        match event {
            InputEvent::KeyDown { key } => self
                .keybindings
                .lookup(key)
                .map(|action| self.command_for(action)),
            InputEvent::MouseMotion {
                dx,
                dy,
                buttons,
                modifiers,
            } => {
                if !buttons.left {
                    return None;
                }
                if modifiers.shift {
                    Some(ViewerCommand::Pan { dx: -dx, dy: *dy })
                } else {
                    Some(ViewerCommand::Rotate { dx: *dx, dy: *dy })
                }
            }
            InputEvent::Wheel { delta } => {
                Some(ViewerCommand::Zoom { delta: *delta })
            }
            InputEvent::Resized { width, height } => {
                Some(ViewerCommand::Resize {
                    width: *width,
                    height: *height,
                })
            }
            InputEvent::Quit => Some(ViewerCommand::Quit),
        }
    }

    /// Map a bound key action to its command.
    fn command_for(&self, action: KeyAction) -> ViewerCommand {
        match action {
            KeyAction::Quit => ViewerCommand::Quit,
            KeyAction::ResetView => ViewerCommand::ResetView,
            KeyAction::ToggleSolid => ViewerCommand::ToggleSolid,
            KeyAction::ToggleTexture => ViewerCommand::ToggleTexture,
            KeyAction::RollLeft => ViewerCommand::Roll {
                degrees: self.roll_step,
            },
            KeyAction::RollRight => ViewerCommand::Roll {
                degrees: -self.roll_step,
            },
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default(), 5.0)
    }
}
