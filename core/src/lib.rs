//! # Keyclass Core
//!
//! Keyboard input classification for the engine: a packed key taxonomy,
//! immutable key events, mask-based keystroke predicates and text/label
//! rendering.

pub mod input;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version. Call once at startup.
pub fn init() {
    log::info!("Keyclass Core v{} initialized", VERSION);
}
