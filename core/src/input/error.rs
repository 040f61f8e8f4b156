//! Error types for keyboard input.

use thiserror::Error;

use super::keys::{KeyCode, ModifierCombination};

/// Errors raised at the boundary between a backend and the keyboard taxonomy.
///
/// Classification and rendering of well-formed events never fail; these
/// errors only surface when raw values are decoded or when a renderer is
/// built from caller-supplied tables.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The raw value is not the packed encoding of any known key.
    #[error("unknown key code: {0:#010x}")]
    UnknownKeyCode(u32),
    /// The raw value is not one of the eight modifier combinations.
    #[error("unknown modifier combination: {0}")]
    UnknownModifier(u8),
    /// The raw value is not a known key state.
    #[error("unknown key state: {0}")]
    UnknownKeyState(u8),
    /// A glyph table has no entry for this key.
    #[error("no glyph registered for {0:?}")]
    MissingGlyph(KeyCode),
    /// A modifier label table has no entry for this combination.
    #[error("no label registered for modifier {0:?}")]
    MissingModifierLabel(ModifierCombination),
}

/// Result alias for fallible keyboard input operations.
pub type InputResult<T> = Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InputError::UnknownKeyCode(0x0003_0000);
        assert_eq!(err.to_string(), "unknown key code: 0x00030000");

        let err = InputError::MissingGlyph(KeyCode::F7);
        assert_eq!(err.to_string(), "no glyph registered for F7");

        let err = InputError::MissingModifierLabel(ModifierCombination::CtrlAlt);
        assert_eq!(err.to_string(), "no label registered for modifier CtrlAlt");
    }
}
