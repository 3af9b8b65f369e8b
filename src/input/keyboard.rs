use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_orientation = "KeyR"
/// scale_up = "Equal"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Return the object to its startup orientation.
    ResetOrientation,
    /// Grow the scale parameter by one step.
    ScaleUp,
    /// Shrink the scale parameter by one step.
    ScaleDown,
}
