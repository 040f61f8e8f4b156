//! Keystroke classification.
//!
//! Each predicate is a mask test against the packed [`KeyCode`] value plus a
//! modifier check. Events whose state is [`KeyState::None`] never match any
//! predicate.
//!
//! Shift is accepted for letters and symbols but not for digits: on common
//! layouts Shift turns a digit into a symbol, so `Shift+5` is not a numeric
//! keystroke while `Shift+a` is still alphabetic.
//!
//! [`KeyCode`]: super::keys::KeyCode

use super::event::KeyEvent;
use super::keys::{KeyCategory, KeyState, ModifierCombination};

#[inline]
fn has_tag(event: &KeyEvent, category: KeyCategory) -> bool {
    event.state() != KeyState::None && event.key().raw() & category.mask() != 0
}

#[inline]
fn is_plain_or_shifted(event: &KeyEvent) -> bool {
    matches!(
        event.modifier(),
        ModifierCombination::None | ModifierCombination::Shift
    )
}

/// Whether the keystroke types a letter.
#[inline]
pub fn is_alpha(event: &KeyEvent) -> bool {
    has_tag(event, KeyCategory::Alpha) && is_plain_or_shifted(event)
}

/// Whether the keystroke types a digit.
#[inline]
pub fn is_numeric(event: &KeyEvent) -> bool {
    has_tag(event, KeyCategory::Numeric) && event.modifier() == ModifierCombination::None
}

/// Whether the keystroke types a letter or a digit.
#[inline]
pub fn is_alphanumeric(event: &KeyEvent) -> bool {
    is_alpha(event) || is_numeric(event)
}

/// Whether the keystroke types a symbol.
#[inline]
pub fn is_symbol(event: &KeyEvent) -> bool {
    has_tag(event, KeyCategory::Symbol) && is_plain_or_shifted(event)
}

/// Whether the keystroke would insert a visible character into a text field.
#[inline]
pub fn is_text(event: &KeyEvent) -> bool {
    is_alphanumeric(event) || is_symbol(event)
}

/// Whether the key is an editing/navigation key, regardless of modifiers.
#[inline]
pub fn is_control(event: &KeyEvent) -> bool {
    has_tag(event, KeyCategory::Control)
}

/// Whether the key is on the function row, regardless of modifiers.
#[inline]
pub fn is_function_row(event: &KeyEvent) -> bool {
    has_tag(event, KeyCategory::FunctionRow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys::KeyCode;

    fn down(key: KeyCode, modifier: ModifierCombination) -> KeyEvent {
        KeyEvent::pressed(key, modifier)
    }

    #[test]
    fn test_alpha_accepts_plain_and_shift_only() {
        for key in KeyCategory::Alpha.keys().iter().copied() {
            for modifier in ModifierCombination::ALL {
                let expected = !modifier.has_ctrl() && !modifier.has_alt();
                assert_eq!(
                    is_alpha(&down(key, modifier)),
                    expected,
                    "{key:?} with {modifier:?}"
                );
            }
        }
    }

    #[test]
    fn test_numeric_rejects_shift() {
        assert!(is_numeric(&down(KeyCode::Digit5, ModifierCombination::None)));
        assert!(!is_numeric(&down(KeyCode::Digit5, ModifierCombination::Shift)));
        assert!(!is_numeric(&down(KeyCode::Digit5, ModifierCombination::Ctrl)));

        assert!(is_alpha(&down(KeyCode::A, ModifierCombination::None)));
        assert!(is_alpha(&down(KeyCode::A, ModifierCombination::Shift)));
    }

    #[test]
    fn test_symbol_accepts_plain_and_shift_only() {
        assert!(is_symbol(&down(KeyCode::Hash, ModifierCombination::None)));
        assert!(is_symbol(&down(KeyCode::Hash, ModifierCombination::Shift)));
        assert!(!is_symbol(&down(KeyCode::Hash, ModifierCombination::ShiftAlt)));
        assert!(!is_symbol(&down(KeyCode::Hash, ModifierCombination::Ctrl)));
    }

    #[test]
    fn test_alphanumeric_and_text() {
        assert!(is_alphanumeric(&down(KeyCode::Z, ModifierCombination::Shift)));
        assert!(is_alphanumeric(&down(KeyCode::Digit0, ModifierCombination::None)));
        assert!(!is_alphanumeric(&down(KeyCode::Comma, ModifierCombination::None)));

        assert!(is_text(&down(KeyCode::Comma, ModifierCombination::None)));
        assert!(is_text(&down(KeyCode::Q, ModifierCombination::None)));
        assert!(!is_text(&down(KeyCode::Digit3, ModifierCombination::Shift)));
        assert!(!is_text(&down(KeyCode::Enter, ModifierCombination::None)));
        assert!(!is_text(&down(KeyCode::F1, ModifierCombination::None)));
        assert!(!is_text(&down(KeyCode::None, ModifierCombination::None)));
    }

    #[test]
    fn test_control_and_function_row_ignore_modifiers() {
        for modifier in ModifierCombination::ALL {
            assert!(is_control(&down(KeyCode::Backspace, modifier)));
            assert!(is_function_row(&down(KeyCode::F1, modifier)));
            assert!(!is_control(&down(KeyCode::F1, modifier)));
            assert!(!is_function_row(&down(KeyCode::Backspace, modifier)));
        }
    }

    #[test]
    fn test_predicates_match_category_tag() {
        for key in KeyCode::ALL {
            let event = down(key, ModifierCombination::None);
            let category = key.category();
            assert_eq!(is_alpha(&event), category == KeyCategory::Alpha);
            assert_eq!(is_numeric(&event), category == KeyCategory::Numeric);
            assert_eq!(is_symbol(&event), category == KeyCategory::Symbol);
            assert_eq!(is_control(&event), category == KeyCategory::Control);
            assert_eq!(is_function_row(&event), category == KeyCategory::FunctionRow);
        }
    }

    #[test]
    fn test_release_events_classify_like_presses() {
        let up = KeyEvent::released(KeyCode::A, ModifierCombination::None);
        assert!(is_alpha(&up));
        assert!(is_text(&up));
    }

    #[test]
    fn test_stateless_events_never_match() {
        for key in KeyCode::ALL {
            let event = KeyEvent::new(key, ModifierCombination::None, KeyState::None);
            assert!(!is_alpha(&event));
            assert!(!is_numeric(&event));
            assert!(!is_symbol(&event));
            assert!(!is_text(&event));
            assert!(!is_control(&event));
            assert!(!is_function_row(&event));
        }
    }
}
