//! Platform-agnostic input events.
//!
//! An [`EventSource`](crate::viewer::EventSource) yields a finite, ordered
//! batch of these per poll; the [`InputProcessor`](super::InputProcessor)
//! converts each into at most one
//! [`ViewerCommand`](crate::command::ViewerCommand).
//!
//! Motion events carry their own button and modifier masks, so the
//! processor needs no cross-event state to interpret a drag.

/// Mouse buttons held during a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Primary (left) button held.
    pub left: bool,
    /// Secondary (right) button held.
    pub right: bool,
    /// Middle (wheel) button held.
    pub middle: bool,
}

impl ButtonState {
    /// State with only the left button held — the drag gesture the viewer
    /// cares about.
    pub const LEFT: ButtonState = ButtonState {
        left: true,
        right: false,
        middle: false,
    };
}

/// Keyboard modifiers held during a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key held (switches a drag from rotate to pan).
    pub shift: bool,
}

impl Modifiers {
    /// Shift held.
    pub const SHIFT: Modifiers = Modifiers { shift: true };
    /// Nothing held.
    pub const NONE: Modifiers = Modifiers { shift: false };
}

/// A discrete input event from the external event source.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed. Key strings use the `winit::keyboard::KeyCode` debug
    /// format: `"KeyZ"`, `"Escape"`, etc.
    KeyDown {
        /// Physical key identifier.
        key: String,
    },
    /// Relative mouse motion with the masks sampled at event time.
    MouseMotion {
        /// Horizontal delta in pixels (positive = right).
        dx: i32,
        /// Vertical delta in pixels (positive = down).
        dy: i32,
        /// Buttons held during the motion.
        buttons: ButtonState,
        /// Modifier keys held during the motion.
        modifiers: Modifiers,
    },
    /// Scroll wheel clicks (positive = toward the model).
    Wheel {
        /// Wheel delta in clicks.
        delta: i32,
    },
    /// The window/display surface changed size.
    Resized {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// The window system requested shutdown.
    Quit,
}
