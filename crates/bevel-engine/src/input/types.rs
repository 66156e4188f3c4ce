use std::fmt;

/// Keyboard key identifier.
///
/// Covers the keys the demo binds plus the usual alphanumerics. Keys without a
/// variant map to `Key::Unknown(u32)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events fed in by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    #[inline]
    pub fn pressed(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    #[inline]
    pub fn released(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("Up"),
            Key::ArrowDown => f.write_str("Down"),
            Key::ArrowLeft => f.write_str("Left"),
            Key::ArrowRight => f.write_str("Right"),
            Key::Digit0 => f.write_str("0"),
            Key::Digit1 => f.write_str("1"),
            Key::Digit2 => f.write_str("2"),
            Key::Digit3 => f.write_str("3"),
            Key::Digit4 => f.write_str("4"),
            Key::Digit5 => f.write_str("5"),
            Key::Digit6 => f.write_str("6"),
            Key::Digit7 => f.write_str("7"),
            Key::Digit8 => f.write_str("8"),
            Key::Digit9 => f.write_str("9"),
            Key::Unknown(code) => write!(f, "Key#{code}"),
            other => write!(f, "{:?}", other),
        }
    }
}
