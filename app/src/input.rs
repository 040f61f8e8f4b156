//! Input conversion utilities.
//!
//! Maps winit key codes, element states and modifier state to engine
//! [`KeyCode`], [`KeyState`] and [`ModifierCombination`] values, and builds
//! [`KeyEvent`]s from winit keyboard input.

use keyclass_core::input::{KeyCode, KeyEvent, KeyState, ModifierCombination};
use winit::event::ElementState;
use winit::keyboard::{self, Key, ModifiersState, PhysicalKey};

/// Convert a winit [`keyboard::KeyCode`] to an engine [`KeyCode`], if a
/// mapping exists.
///
/// Numpad digits map onto the top-row digits and numpad operators onto the
/// matching symbol keys.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<KeyCode> {
    Some(match key {
        // Letters
        keyboard::KeyCode::KeyA => KeyCode::A,
        keyboard::KeyCode::KeyB => KeyCode::B,
        keyboard::KeyCode::KeyC => KeyCode::C,
        keyboard::KeyCode::KeyD => KeyCode::D,
        keyboard::KeyCode::KeyE => KeyCode::E,
        keyboard::KeyCode::KeyF => KeyCode::F,
        keyboard::KeyCode::KeyG => KeyCode::G,
        keyboard::KeyCode::KeyH => KeyCode::H,
        keyboard::KeyCode::KeyI => KeyCode::I,
        keyboard::KeyCode::KeyJ => KeyCode::J,
        keyboard::KeyCode::KeyK => KeyCode::K,
        keyboard::KeyCode::KeyL => KeyCode::L,
        keyboard::KeyCode::KeyM => KeyCode::M,
        keyboard::KeyCode::KeyN => KeyCode::N,
        keyboard::KeyCode::KeyO => KeyCode::O,
        keyboard::KeyCode::KeyP => KeyCode::P,
        keyboard::KeyCode::KeyQ => KeyCode::Q,
        keyboard::KeyCode::KeyR => KeyCode::R,
        keyboard::KeyCode::KeyS => KeyCode::S,
        keyboard::KeyCode::KeyT => KeyCode::T,
        keyboard::KeyCode::KeyU => KeyCode::U,
        keyboard::KeyCode::KeyV => KeyCode::V,
        keyboard::KeyCode::KeyW => KeyCode::W,
        keyboard::KeyCode::KeyX => KeyCode::X,
        keyboard::KeyCode::KeyY => KeyCode::Y,
        keyboard::KeyCode::KeyZ => KeyCode::Z,

        // Digits
        keyboard::KeyCode::Digit0 | keyboard::KeyCode::Numpad0 => KeyCode::Digit0,
        keyboard::KeyCode::Digit1 | keyboard::KeyCode::Numpad1 => KeyCode::Digit1,
        keyboard::KeyCode::Digit2 | keyboard::KeyCode::Numpad2 => KeyCode::Digit2,
        keyboard::KeyCode::Digit3 | keyboard::KeyCode::Numpad3 => KeyCode::Digit3,
        keyboard::KeyCode::Digit4 | keyboard::KeyCode::Numpad4 => KeyCode::Digit4,
        keyboard::KeyCode::Digit5 | keyboard::KeyCode::Numpad5 => KeyCode::Digit5,
        keyboard::KeyCode::Digit6 | keyboard::KeyCode::Numpad6 => KeyCode::Digit6,
        keyboard::KeyCode::Digit7 | keyboard::KeyCode::Numpad7 => KeyCode::Digit7,
        keyboard::KeyCode::Digit8 | keyboard::KeyCode::Numpad8 => KeyCode::Digit8,
        keyboard::KeyCode::Digit9 | keyboard::KeyCode::Numpad9 => KeyCode::Digit9,

        // Function keys
        keyboard::KeyCode::F1 => KeyCode::F1,
        keyboard::KeyCode::F2 => KeyCode::F2,
        keyboard::KeyCode::F3 => KeyCode::F3,
        keyboard::KeyCode::F4 => KeyCode::F4,
        keyboard::KeyCode::F5 => KeyCode::F5,
        keyboard::KeyCode::F6 => KeyCode::F6,
        keyboard::KeyCode::F7 => KeyCode::F7,
        keyboard::KeyCode::F8 => KeyCode::F8,
        keyboard::KeyCode::F9 => KeyCode::F9,
        keyboard::KeyCode::F10 => KeyCode::F10,
        keyboard::KeyCode::F11 => KeyCode::F11,
        keyboard::KeyCode::F12 => KeyCode::F12,

        // Arrows
        keyboard::KeyCode::ArrowUp => KeyCode::ArrowUp,
        keyboard::KeyCode::ArrowDown => KeyCode::ArrowDown,
        keyboard::KeyCode::ArrowLeft => KeyCode::ArrowLeft,
        keyboard::KeyCode::ArrowRight => KeyCode::ArrowRight,

        // Editing and navigation
        keyboard::KeyCode::Enter | keyboard::KeyCode::NumpadEnter => KeyCode::Enter,
        keyboard::KeyCode::Escape => KeyCode::Escape,
        keyboard::KeyCode::Tab => KeyCode::Tab,
        keyboard::KeyCode::Backspace => KeyCode::Backspace,
        keyboard::KeyCode::Delete => KeyCode::Delete,
        keyboard::KeyCode::Insert => KeyCode::Insert,
        keyboard::KeyCode::Home => KeyCode::Home,
        keyboard::KeyCode::End => KeyCode::End,
        keyboard::KeyCode::PageUp => KeyCode::PageUp,
        keyboard::KeyCode::PageDown => KeyCode::PageDown,
        keyboard::KeyCode::ScrollLock => KeyCode::ScrollLock,
        keyboard::KeyCode::Pause => KeyCode::PauseBreak,

        // Punctuation / symbols
        keyboard::KeyCode::Minus | keyboard::KeyCode::NumpadSubtract => KeyCode::Minus,
        keyboard::KeyCode::Equal => KeyCode::Equals,
        keyboard::KeyCode::NumpadAdd => KeyCode::Plus,
        keyboard::KeyCode::NumpadMultiply => KeyCode::Star,
        keyboard::KeyCode::BracketLeft => KeyCode::BracketLeft,
        keyboard::KeyCode::BracketRight => KeyCode::BracketRight,
        keyboard::KeyCode::Backslash => KeyCode::Backslash,
        keyboard::KeyCode::Semicolon => KeyCode::Semicolon,
        keyboard::KeyCode::Quote => KeyCode::Apostrophe,
        keyboard::KeyCode::Backquote => KeyCode::Backtick,
        keyboard::KeyCode::Comma => KeyCode::Comma,
        keyboard::KeyCode::Period | keyboard::KeyCode::NumpadDecimal => KeyCode::Period,
        keyboard::KeyCode::Slash | keyboard::KeyCode::NumpadDivide => KeyCode::Slash,

        _ => return None,
    })
}

/// Convert a typed character to the engine key that produces it.
///
/// Letters are matched case-insensitively. Used as a fallback when the
/// physical key is unknown to [`map_winit_key`].
pub fn map_character(c: char) -> Option<KeyCode> {
    Some(match c.to_ascii_lowercase() {
        'a' => KeyCode::A,
        'b' => KeyCode::B,
        'c' => KeyCode::C,
        'd' => KeyCode::D,
        'e' => KeyCode::E,
        'f' => KeyCode::F,
        'g' => KeyCode::G,
        'h' => KeyCode::H,
        'i' => KeyCode::I,
        'j' => KeyCode::J,
        'k' => KeyCode::K,
        'l' => KeyCode::L,
        'm' => KeyCode::M,
        'n' => KeyCode::N,
        'o' => KeyCode::O,
        'p' => KeyCode::P,
        'q' => KeyCode::Q,
        'r' => KeyCode::R,
        's' => KeyCode::S,
        't' => KeyCode::T,
        'u' => KeyCode::U,
        'v' => KeyCode::V,
        'w' => KeyCode::W,
        'x' => KeyCode::X,
        'y' => KeyCode::Y,
        'z' => KeyCode::Z,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        '0' => KeyCode::Digit0,
        '-' => KeyCode::Minus,
        '+' => KeyCode::Plus,
        '[' => KeyCode::BracketLeft,
        ']' => KeyCode::BracketRight,
        '\\' => KeyCode::Backslash,
        '/' => KeyCode::Slash,
        '.' => KeyCode::Period,
        ';' => KeyCode::Semicolon,
        '\'' => KeyCode::Apostrophe,
        '*' => KeyCode::Star,
        ',' => KeyCode::Comma,
        '<' => KeyCode::AngleBracketLeft,
        '>' => KeyCode::AngleBracketRight,
        '?' => KeyCode::Question,
        '|' => KeyCode::Pipe,
        '{' => KeyCode::CurlyBracketLeft,
        '}' => KeyCode::CurlyBracketRight,
        '"' => KeyCode::Quotes,
        ':' => KeyCode::Colon,
        '`' => KeyCode::Backtick,
        '~' => KeyCode::Accent,
        '!' => KeyCode::Exclamation,
        '@' => KeyCode::At,
        '#' => KeyCode::Hash,
        '$' => KeyCode::Dollar,
        '%' => KeyCode::Percent,
        '^' => KeyCode::Hat,
        '&' => KeyCode::Ampersand,
        '(' => KeyCode::LeftParenthesis,
        ')' => KeyCode::RightParenthesis,
        '_' => KeyCode::Underscore,
        '=' => KeyCode::Equals,
        '\t' => KeyCode::Tab,
        '\n' | '\r' => KeyCode::Enter,
        _ => return None,
    })
}

/// Convert a winit logical key to an engine key. Only single-character keys
/// are considered.
pub fn map_logical_key(key: &Key) -> Option<KeyCode> {
    match key {
        Key::Character(s) => {
            let mut chars = s.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            map_character(c)
        }
        _ => None,
    }
}

/// Convert a winit [`ElementState`] to a [`KeyState`].
pub fn map_element_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Down,
        ElementState::Released => KeyState::Up,
    }
}

/// Fold winit modifier flags into one of the eight [`ModifierCombination`]s.
///
/// The logo/super key has no bucket and is dropped.
pub fn map_modifiers(state: ModifiersState) -> ModifierCombination {
    if state.super_key() {
        log::trace!("Ignoring logo modifier in {:?}", state);
    }
    ModifierCombination::from_flags(state.control_key(), state.shift_key(), state.alt_key())
}

/// Build a [`KeyEvent`] from the pieces of a winit keyboard event.
///
/// The physical key is tried first and the logical key second. Returns `None`
/// when neither maps to an engine key.
pub fn key_event_from_parts(
    physical_key: PhysicalKey,
    logical_key: &Key,
    state: ElementState,
    modifiers: ModifiersState,
) -> Option<KeyEvent> {
    let physical = match physical_key {
        PhysicalKey::Code(code) => map_winit_key(code),
        PhysicalKey::Unidentified(_) => None,
    };

    let Some(key) = physical.or_else(|| map_logical_key(logical_key)) else {
        log::trace!("Unmapped key: {:?} / {:?}", physical_key, logical_key);
        return None;
    };

    Some(KeyEvent::new(
        key,
        map_modifiers(modifiers),
        map_element_state(state),
    ))
}

/// Build a [`KeyEvent`] from a winit keyboard event and the modifier state
/// last reported by `WindowEvent::ModifiersChanged`.
///
/// Repeat events are forwarded as ordinary presses.
pub fn key_event_from_winit(
    event: &winit::event::KeyEvent,
    modifiers: ModifiersState,
) -> Option<KeyEvent> {
    key_event_from_parts(event.physical_key, &event.logical_key, event.state, modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyclass_core::input::{KeyCategory, TextRenderer};
    use rstest::rstest;
    use winit::keyboard::{NamedKey, NativeKeyCode};

    fn code(key: keyboard::KeyCode) -> PhysicalKey {
        PhysicalKey::Code(key)
    }

    #[rstest]
    #[case::letter(keyboard::KeyCode::KeyQ, KeyCode::Q)]
    #[case::digit(keyboard::KeyCode::Digit0, KeyCode::Digit0)]
    #[case::numpad_digit(keyboard::KeyCode::Numpad7, KeyCode::Digit7)]
    #[case::numpad_add(keyboard::KeyCode::NumpadAdd, KeyCode::Plus)]
    #[case::quote(keyboard::KeyCode::Quote, KeyCode::Apostrophe)]
    #[case::pause(keyboard::KeyCode::Pause, KeyCode::PauseBreak)]
    #[case::function(keyboard::KeyCode::F11, KeyCode::F11)]
    fn test_map_winit_key(#[case] winit_key: keyboard::KeyCode, #[case] expected: KeyCode) {
        assert_eq!(map_winit_key(winit_key), Some(expected));
    }

    #[test]
    fn test_unmapped_winit_keys() {
        assert_eq!(map_winit_key(keyboard::KeyCode::ShiftLeft), None);
        assert_eq!(map_winit_key(keyboard::KeyCode::F13), None);
        assert_eq!(map_winit_key(keyboard::KeyCode::CapsLock), None);
    }

    #[test]
    fn test_map_character_covers_printable_keys() {
        let renderer = TextRenderer::new();
        for category in [KeyCategory::Alpha, KeyCategory::Numeric, KeyCategory::Symbol] {
            let count = category
                .keys()
                .iter()
                .filter(|&&key| {
                    let glyph = renderer.glyph(key).unwrap();
                    let c = glyph.chars().next().unwrap();
                    map_character(c) == Some(key)
                })
                .count();
            assert_eq!(count, category.keys().len(), "{category:?}");
        }
        assert_eq!(map_character('A'), Some(KeyCode::A));
        assert_eq!(map_character('é'), None);
    }

    #[test]
    fn test_map_logical_key() {
        assert_eq!(
            map_logical_key(&Key::Character("{".into())),
            Some(KeyCode::CurlyBracketLeft)
        );
        assert_eq!(map_logical_key(&Key::Character("ab".into())), None);
        assert_eq!(map_logical_key(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn test_map_element_state() {
        assert_eq!(map_element_state(ElementState::Pressed), KeyState::Down);
        assert_eq!(map_element_state(ElementState::Released), KeyState::Up);
    }

    #[rstest]
    #[case::none(ModifiersState::empty(), ModifierCombination::None)]
    #[case::shift(ModifiersState::SHIFT, ModifierCombination::Shift)]
    #[case::ctrl_alt(
        ModifiersState::CONTROL | ModifiersState::ALT,
        ModifierCombination::CtrlAlt
    )]
    #[case::all(
        ModifiersState::CONTROL | ModifiersState::SHIFT | ModifiersState::ALT,
        ModifierCombination::CtrlShiftAlt
    )]
    #[case::logo_dropped(
        ModifiersState::SUPER | ModifiersState::SHIFT,
        ModifierCombination::Shift
    )]
    fn test_map_modifiers(#[case] state: ModifiersState, #[case] expected: ModifierCombination) {
        assert_eq!(map_modifiers(state), expected);
    }

    #[test]
    fn test_key_event_prefers_physical_key() {
        // Shift+1 on a US layout reports '!' logically; the engine sees the digit key
        let event = key_event_from_parts(
            code(keyboard::KeyCode::Digit1),
            &Key::Character("!".into()),
            ElementState::Pressed,
            ModifiersState::SHIFT,
        )
        .unwrap();
        assert_eq!(event.key(), KeyCode::Digit1);
        assert_eq!(event.modifier(), ModifierCombination::Shift);
        assert_eq!(event.state(), KeyState::Down);
    }

    #[test]
    fn test_key_event_falls_back_to_logical_key() {
        let event = key_event_from_parts(
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            &Key::Character("@".into()),
            ElementState::Released,
            ModifiersState::empty(),
        )
        .unwrap();
        assert_eq!(event.key(), KeyCode::At);
        assert_eq!(event.state(), KeyState::Up);
    }

    #[test]
    fn test_key_event_unmapped() {
        let event = key_event_from_parts(
            code(keyboard::KeyCode::ControlLeft),
            &Key::Named(NamedKey::Control),
            ElementState::Pressed,
            ModifiersState::CONTROL,
        );
        assert!(event.is_none());
    }
}
