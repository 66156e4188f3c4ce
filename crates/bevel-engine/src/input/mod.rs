//! Keyboard input.
//!
//! Public API is platform-agnostic. The host translates its window system's
//! key and focus events into `InputEvent`s and feeds them to `InputState`.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
