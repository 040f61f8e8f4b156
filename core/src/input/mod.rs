//! Keyboard input taxonomy and classification.
//!
//! ```text
//! backend key code → KeyEvent → classify::is_* → TextRenderer → text / label
//! ```
//!
//! - [`KeyCode`] packs a category tag and an ordinal into one `u32`
//! - [`KeyEvent`] is an immutable (key, modifier, state) triple
//! - [`classify`] holds the mask-based keystroke predicates
//! - [`TextRenderer`] maps events to inserted text and keybinding labels
//!
//! Backends (see the `keyclass-app` crate for winit) translate their native
//! key codes into [`KeyCode`] values and never attach [`KeyState::None`] to a
//! dispatched event.

pub mod classify;
mod error;
mod event;
mod keys;
mod text;

pub use classify::{
    is_alpha, is_alphanumeric, is_control, is_function_row, is_numeric, is_symbol, is_text,
};
pub use error::{InputError, InputResult};
pub use event::KeyEvent;
pub use keys::{CATEGORY_MASK, KeyCategory, KeyCode, KeyState, ModifierCombination, ORDINAL_MASK};
pub use text::{NO_LABEL, TextRenderer};
