/// Platform-agnostic input events.
///
/// The viewer converts winit events into these and hands them to
/// [`Engine::handle_input`](crate::engine::Engine::handle_input); tests and
/// other hosts can construct them directly.
///
/// # Example
///
/// ```ignore
/// engine.handle_input(InputEvent::CursorMoved { x: 100.0, y: 200.0 }, &mut host);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A parameter control (the scale slider) produced a new value.
    ParameterChanged {
        /// New control value.
        value: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Back, forward and any other extra button.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use super::*;

    #[test]
    fn only_the_left_button_maps_to_left() {
        use winit::event::MouseButton as Winit;

        assert_eq!(MouseButton::from(Winit::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(Winit::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(Winit::Middle), MouseButton::Middle);
        for extra in [Winit::Back, Winit::Forward, Winit::Other(8)] {
            assert_eq!(MouseButton::from(extra), MouseButton::Other);
        }
    }
}
