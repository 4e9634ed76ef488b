use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyZ"`,
/// `"Escape"`), the convention the rest of the crate shares.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleSolid` → `"KeyZ"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Quit, "Escape".into()),
            (KeyAction::ResetView, "KeyX".into()),
            (KeyAction::ToggleSolid, "KeyZ".into()),
            (KeyAction::ToggleTexture, "KeyC".into()),
            (KeyAction::RollLeft, "KeyQ".into()),
            (KeyAction::RollRight, "KeyE".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    ///
    /// A linear scan over a six-entry map; no reverse cache to fall out of
    /// sync after deserialization.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }
}
