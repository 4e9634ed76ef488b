//! Input handling: platform-agnostic event types and the processor that
//! converts raw events into viewer commands.

/// Platform-agnostic input events and button/modifier masks.
pub mod event;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{ButtonState, InputEvent, Modifiers};
pub use processor::{InputProcessor, KeyAction};
