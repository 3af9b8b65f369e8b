//! Input handling: platform-agnostic pointer/parameter events and the key
//! actions they can trigger.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
