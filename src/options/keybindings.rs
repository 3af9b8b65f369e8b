use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ScaleUp` → `"Equal"`). Key strings
    /// use the `winit::keyboard::KeyCode` debug format.
    pub bindings: BTreeMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = BTreeMap::from([
            (KeyAction::ResetOrientation, "KeyR".into()),
            (KeyAction::ScaleUp, "Equal".into()),
            (KeyAction::ScaleDown, "Minus".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find_map(|(action, bound)| (bound == key).then_some(*action))
    }
}
