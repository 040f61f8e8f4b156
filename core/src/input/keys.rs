//! Packed keyboard taxonomy.
//!
//! Every [`KeyCode`] is a `u32` split in two: bits 16..=20 hold a one-hot
//! category tag and the low 16 bits hold the key's ordinal within that
//! category. Testing category membership is a single AND against
//! [`KeyCategory::mask`], and all keys of a category form a contiguous run of
//! packed values starting at [`KeyCategory::base`].

use static_assertions::const_assert;

use super::error::{InputError, InputResult};

/// Bits reserved for the category tag.
pub const CATEGORY_MASK: u32 = 0x001F_0000;

/// Bits reserved for the ordinal within a category.
pub const ORDINAL_MASK: u32 = 0x0000_FFFF;

/// Semantic group a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    /// No key (only [`KeyCode::None`]).
    None,
    /// Letters `a`-`z`.
    Alpha,
    /// Top-row digits.
    Numeric,
    /// Punctuation and symbols.
    Symbol,
    /// Editing and navigation keys.
    Control,
    /// `F1`-`F12`.
    FunctionRow,
}

impl KeyCategory {
    /// Every category, `None` first.
    pub const ALL: [KeyCategory; 6] = [
        KeyCategory::None,
        KeyCategory::Alpha,
        KeyCategory::Numeric,
        KeyCategory::Symbol,
        KeyCategory::Control,
        KeyCategory::FunctionRow,
    ];

    /// Categories that own a tag bit.
    pub const TAGGED: [KeyCategory; 5] = [
        KeyCategory::Alpha,
        KeyCategory::Numeric,
        KeyCategory::Symbol,
        KeyCategory::Control,
        KeyCategory::FunctionRow,
    ];

    /// The tag bit of this category (zero for `None`).
    #[inline]
    pub const fn mask(self) -> u32 {
        match self {
            KeyCategory::None => 0,
            KeyCategory::Alpha => 0x0001_0000,
            KeyCategory::Numeric => 0x0002_0000,
            KeyCategory::Symbol => 0x0004_0000,
            KeyCategory::Control => 0x0008_0000,
            KeyCategory::FunctionRow => 0x0010_0000,
        }
    }

    /// Packed value of the category's first key (ordinal 0).
    #[inline]
    pub const fn base(self) -> u32 {
        self.mask()
    }

    /// Position and length of this category's run inside [`KeyCode::ALL`].
    const fn span(self) -> (usize, usize) {
        match self {
            KeyCategory::None => (0, 1),
            KeyCategory::Alpha => (1, 26),
            KeyCategory::Numeric => (27, 10),
            KeyCategory::Symbol => (37, 32),
            KeyCategory::Control => (69, 16),
            KeyCategory::FunctionRow => (85, 12),
        }
    }

    /// All keys of this category, ordered by ordinal.
    pub fn keys(self) -> &'static [KeyCode] {
        let (start, len) = self.span();
        &KeyCode::ALL[start..start + len]
    }

    /// Extract the category tag of a packed value.
    ///
    /// Returns the category whose mask intersects `raw`, or `None` when no
    /// tag bit is set.
    #[inline]
    pub const fn from_raw(raw: u32) -> KeyCategory {
        let mut i = 0;
        while i < Self::TAGGED.len() {
            let category = Self::TAGGED[i];
            if raw & category.mask() != 0 {
                return category;
            }
            i += 1;
        }
        KeyCategory::None
    }
}

/// A recognized keyboard key, encoded as `category tag | ordinal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u32)]
pub enum KeyCode {
    #[default]
    None = 0,

    // Letters
    A = KeyCategory::Alpha.base(),
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digits, in keyboard row order
    Digit1 = KeyCategory::Numeric.base(),
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,

    // Symbols
    Minus = KeyCategory::Symbol.base(),
    Plus,
    BracketLeft,
    BracketRight,
    Backslash,
    Slash,
    Period,
    Semicolon,
    Apostrophe,
    Star,
    Comma,
    AngleBracketLeft,
    AngleBracketRight,
    Question,
    Pipe,
    CurlyBracketLeft,
    CurlyBracketRight,
    Quotes,
    Colon,
    Backtick,
    Accent,
    Exclamation,
    At,
    Hash,
    Dollar,
    Percent,
    Hat,
    Ampersand,
    LeftParenthesis,
    RightParenthesis,
    Underscore,
    Equals,

    // Control
    Tab = KeyCategory::Control.base(),
    Backspace,
    Escape,
    Home,
    Insert,
    Delete,
    PageDown,
    PageUp,
    ScrollLock,
    PauseBreak,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    End,

    // Function row
    F1 = KeyCategory::FunctionRow.base(),
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl KeyCode {
    /// Every key in packed order.
    pub const ALL: [KeyCode; 97] = [
        KeyCode::None,
        KeyCode::A,
        KeyCode::B,
        KeyCode::C,
        KeyCode::D,
        KeyCode::E,
        KeyCode::F,
        KeyCode::G,
        KeyCode::H,
        KeyCode::I,
        KeyCode::J,
        KeyCode::K,
        KeyCode::L,
        KeyCode::M,
        KeyCode::N,
        KeyCode::O,
        KeyCode::P,
        KeyCode::Q,
        KeyCode::R,
        KeyCode::S,
        KeyCode::T,
        KeyCode::U,
        KeyCode::V,
        KeyCode::W,
        KeyCode::X,
        KeyCode::Y,
        KeyCode::Z,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
        KeyCode::Digit0,
        KeyCode::Minus,
        KeyCode::Plus,
        KeyCode::BracketLeft,
        KeyCode::BracketRight,
        KeyCode::Backslash,
        KeyCode::Slash,
        KeyCode::Period,
        KeyCode::Semicolon,
        KeyCode::Apostrophe,
        KeyCode::Star,
        KeyCode::Comma,
        KeyCode::AngleBracketLeft,
        KeyCode::AngleBracketRight,
        KeyCode::Question,
        KeyCode::Pipe,
        KeyCode::CurlyBracketLeft,
        KeyCode::CurlyBracketRight,
        KeyCode::Quotes,
        KeyCode::Colon,
        KeyCode::Backtick,
        KeyCode::Accent,
        KeyCode::Exclamation,
        KeyCode::At,
        KeyCode::Hash,
        KeyCode::Dollar,
        KeyCode::Percent,
        KeyCode::Hat,
        KeyCode::Ampersand,
        KeyCode::LeftParenthesis,
        KeyCode::RightParenthesis,
        KeyCode::Underscore,
        KeyCode::Equals,
        KeyCode::Tab,
        KeyCode::Backspace,
        KeyCode::Escape,
        KeyCode::Home,
        KeyCode::Insert,
        KeyCode::Delete,
        KeyCode::PageDown,
        KeyCode::PageUp,
        KeyCode::ScrollLock,
        KeyCode::PauseBreak,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::Enter,
        KeyCode::End,
        KeyCode::F1,
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::F4,
        KeyCode::F5,
        KeyCode::F6,
        KeyCode::F7,
        KeyCode::F8,
        KeyCode::F9,
        KeyCode::F10,
        KeyCode::F11,
        KeyCode::F12,
    ];

    /// The packed `category | ordinal` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Position of the key within its category.
    #[inline]
    pub const fn ordinal(self) -> u16 {
        (self.raw() & ORDINAL_MASK) as u16
    }

    /// The key's category tag.
    #[inline]
    pub const fn category(self) -> KeyCategory {
        KeyCategory::from_raw(self.raw())
    }

    /// Decode a packed value back into a key.
    ///
    /// Returns `None` for values with stray bits, more than one tag bit, or an
    /// ordinal past the end of the category.
    pub fn from_raw(raw: u32) -> Option<KeyCode> {
        if raw == 0 {
            return Some(KeyCode::None);
        }
        let tag = raw & CATEGORY_MASK;
        if raw & !(CATEGORY_MASK | ORDINAL_MASK) != 0 || tag.count_ones() != 1 {
            return None;
        }
        let category = KeyCategory::from_raw(tag);
        category
            .keys()
            .get((raw & ORDINAL_MASK) as usize)
            .copied()
    }
}

impl TryFrom<u32> for KeyCode {
    type Error = InputError;

    fn try_from(raw: u32) -> InputResult<Self> {
        KeyCode::from_raw(raw).ok_or(InputError::UnknownKeyCode(raw))
    }
}

impl From<KeyCode> for u32 {
    fn from(key: KeyCode) -> Self {
        key.raw()
    }
}

/// The modifier keys held during a keystroke.
///
/// This is a closed set of eight combinations rather than independent flags;
/// backends fold anything else (e.g. the logo key) into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ModifierCombination {
    #[default]
    None,
    Shift,
    Ctrl,
    Alt,
    CtrlShift,
    CtrlAlt,
    ShiftAlt,
    CtrlShiftAlt,
}

impl ModifierCombination {
    /// All eight combinations in discriminant order.
    pub const ALL: [ModifierCombination; 8] = [
        ModifierCombination::None,
        ModifierCombination::Shift,
        ModifierCombination::Ctrl,
        ModifierCombination::Alt,
        ModifierCombination::CtrlShift,
        ModifierCombination::CtrlAlt,
        ModifierCombination::ShiftAlt,
        ModifierCombination::CtrlShiftAlt,
    ];

    /// Bucket individual modifier flags into a combination.
    pub const fn from_flags(ctrl: bool, shift: bool, alt: bool) -> Self {
        match (ctrl, shift, alt) {
            (false, false, false) => ModifierCombination::None,
            (false, true, false) => ModifierCombination::Shift,
            (true, false, false) => ModifierCombination::Ctrl,
            (false, false, true) => ModifierCombination::Alt,
            (true, true, false) => ModifierCombination::CtrlShift,
            (true, false, true) => ModifierCombination::CtrlAlt,
            (false, true, true) => ModifierCombination::ShiftAlt,
            (true, true, true) => ModifierCombination::CtrlShiftAlt,
        }
    }

    /// Check if shift is part of the combination
    #[inline]
    pub const fn has_shift(self) -> bool {
        matches!(
            self,
            ModifierCombination::Shift
                | ModifierCombination::CtrlShift
                | ModifierCombination::ShiftAlt
                | ModifierCombination::CtrlShiftAlt
        )
    }

    /// Check if ctrl is part of the combination
    #[inline]
    pub const fn has_ctrl(self) -> bool {
        matches!(
            self,
            ModifierCombination::Ctrl
                | ModifierCombination::CtrlShift
                | ModifierCombination::CtrlAlt
                | ModifierCombination::CtrlShiftAlt
        )
    }

    /// Check if alt is part of the combination
    #[inline]
    pub const fn has_alt(self) -> bool {
        matches!(
            self,
            ModifierCombination::Alt
                | ModifierCombination::CtrlAlt
                | ModifierCombination::ShiftAlt
                | ModifierCombination::CtrlShiftAlt
        )
    }
}

impl TryFrom<u8> for ModifierCombination {
    type Error = InputError;

    fn try_from(raw: u8) -> InputResult<Self> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(InputError::UnknownModifier(raw))
    }
}

/// Direction of a key transition.
///
/// `None` means no key event is pending; backends never attach it to a
/// dispatched signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum KeyState {
    #[default]
    None,
    Up,
    Down,
}

impl KeyState {
    /// Whether this is a press transition.
    #[inline]
    pub const fn is_pressed(self) -> bool {
        matches!(self, KeyState::Down)
    }
}

impl TryFrom<u8> for KeyState {
    type Error = InputError;

    fn try_from(raw: u8) -> InputResult<Self> {
        match raw {
            0 => Ok(KeyState::None),
            1 => Ok(KeyState::Up),
            2 => Ok(KeyState::Down),
            _ => Err(InputError::UnknownKeyState(raw)),
        }
    }
}

// ---------------------------------------------------------------------------
// Compile-time layout checks
// ---------------------------------------------------------------------------

const fn category_masks_are_disjoint() -> bool {
    let tagged = KeyCategory::TAGGED;
    let mut i = 0;
    while i < tagged.len() {
        let mask = tagged[i].mask();
        if mask.count_ones() != 1 || mask & !CATEGORY_MASK != 0 {
            return false;
        }
        let mut j = i + 1;
        while j < tagged.len() {
            if mask & tagged[j].mask() != 0 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn category_runs_are_contiguous() -> bool {
    let mut covered = 0;
    let mut c = 0;
    while c < KeyCategory::ALL.len() {
        let category = KeyCategory::ALL[c];
        let (start, len) = category.span();
        if start != covered {
            return false;
        }
        let mut k = 0;
        while k < len {
            let raw = KeyCode::ALL[start + k] as u32;
            if raw != category.base() + k as u32 {
                return false;
            }
            if raw & CATEGORY_MASK != category.mask() {
                return false;
            }
            k += 1;
        }
        covered += len;
        c += 1;
    }
    covered == KeyCode::ALL.len()
}

const_assert!(category_masks_are_disjoint());
const_assert!(category_runs_are_contiguous());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_pairwise_disjoint() {
        for (i, a) in KeyCategory::ALL.iter().enumerate() {
            for b in &KeyCategory::ALL[i + 1..] {
                assert_eq!(a.mask() & b.mask(), 0, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_every_key_has_exactly_one_tag() {
        for key in KeyCode::ALL {
            let tags = KeyCategory::TAGGED
                .iter()
                .filter(|c| key.raw() & c.mask() != 0)
                .count();
            if key == KeyCode::None {
                assert_eq!(tags, 0);
            } else {
                assert_eq!(tags, 1, "{key:?} carries {tags} tags");
            }
        }
    }

    #[test]
    fn test_category_extraction() {
        assert_eq!(KeyCode::None.category(), KeyCategory::None);
        assert_eq!(KeyCode::Q.category(), KeyCategory::Alpha);
        assert_eq!(KeyCode::Digit0.category(), KeyCategory::Numeric);
        assert_eq!(KeyCode::Pipe.category(), KeyCategory::Symbol);
        assert_eq!(KeyCode::PauseBreak.category(), KeyCategory::Control);
        assert_eq!(KeyCode::F12.category(), KeyCategory::FunctionRow);
    }

    #[test]
    fn test_category_runs() {
        assert_eq!(KeyCategory::Alpha.keys().len(), 26);
        assert_eq!(KeyCategory::Numeric.keys().len(), 10);
        assert_eq!(KeyCategory::Symbol.keys().len(), 32);
        assert_eq!(KeyCategory::Control.keys().len(), 16);
        assert_eq!(KeyCategory::FunctionRow.keys().len(), 12);
        assert_eq!(KeyCategory::None.keys(), &[KeyCode::None]);

        for category in KeyCategory::ALL {
            for (ordinal, key) in category.keys().iter().enumerate() {
                assert_eq!(key.category(), category);
                assert_eq!(key.ordinal() as usize, ordinal);
            }
        }
    }

    #[test]
    fn test_digits_follow_keyboard_row() {
        assert_eq!(KeyCode::Digit1.raw(), 0x0002_0000);
        assert_eq!(KeyCode::Digit9.ordinal(), 8);
        assert_eq!(KeyCode::Digit0.ordinal(), 9);
    }

    #[test]
    fn test_packed_values() {
        assert_eq!(KeyCode::A.raw(), 0x0001_0000);
        assert_eq!(KeyCode::Z.raw(), 0x0001_0019);
        assert_eq!(KeyCode::Minus.raw(), 0x0004_0000);
        assert_eq!(KeyCode::End.raw(), 0x0008_000F);
        assert_eq!(KeyCode::F1.raw(), 0x0010_0000);
    }

    #[test]
    fn test_from_raw_recovers_every_key() {
        for key in KeyCode::ALL {
            assert_eq!(KeyCode::from_raw(key.raw()), Some(key));
            assert_eq!(KeyCode::try_from(u32::from(key)), Ok(key));
        }
    }

    #[test]
    fn test_from_raw_rejects_malformed_values() {
        // Past the end of the alpha run
        assert_eq!(KeyCode::from_raw(0x0001_001A), None);
        // Two tag bits
        assert_eq!(KeyCode::from_raw(0x0003_0000), None);
        // Tag bit outside the category region
        assert_eq!(KeyCode::from_raw(0x0020_0000), None);
        // Ordinal without a tag
        assert_eq!(KeyCode::from_raw(0x0000_0005), None);
        assert_eq!(
            KeyCode::try_from(0x0010_000C),
            Err(InputError::UnknownKeyCode(0x0010_000C))
        );
    }

    #[test]
    fn test_modifier_from_flags() {
        use ModifierCombination as M;
        assert_eq!(M::from_flags(false, false, false), M::None);
        assert_eq!(M::from_flags(false, true, false), M::Shift);
        assert_eq!(M::from_flags(true, false, false), M::Ctrl);
        assert_eq!(M::from_flags(false, false, true), M::Alt);
        assert_eq!(M::from_flags(true, true, false), M::CtrlShift);
        assert_eq!(M::from_flags(true, false, true), M::CtrlAlt);
        assert_eq!(M::from_flags(false, true, true), M::ShiftAlt);
        assert_eq!(M::from_flags(true, true, true), M::CtrlShiftAlt);
    }

    #[test]
    fn test_modifier_flags_round_trip_through_buckets() {
        for combo in ModifierCombination::ALL {
            let rebuilt =
                ModifierCombination::from_flags(combo.has_ctrl(), combo.has_shift(), combo.has_alt());
            assert_eq!(rebuilt, combo);
        }
    }

    #[test]
    fn test_raw_discriminants() {
        assert_eq!(
            ModifierCombination::try_from(7),
            Ok(ModifierCombination::CtrlShiftAlt)
        );
        assert_eq!(
            ModifierCombination::try_from(8),
            Err(InputError::UnknownModifier(8))
        );
        assert_eq!(KeyState::try_from(2), Ok(KeyState::Down));
        assert_eq!(KeyState::try_from(3), Err(InputError::UnknownKeyState(3)));
    }

    #[test]
    fn test_key_state() {
        assert!(KeyState::Down.is_pressed());
        assert!(!KeyState::Up.is_pressed());
        assert!(!KeyState::None.is_pressed());
        assert_eq!(KeyState::default(), KeyState::None);
    }
}
