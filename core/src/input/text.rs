//! Text and label rendering for key events.
//!
//! [`TextRenderer`] owns two read-only tables: one glyph per [`KeyCode`] and
//! one label per [`ModifierCombination`]. It turns events into the text they
//! insert into a text field ([`TextRenderer::literal_text`]) and into
//! keybinding labels such as `CTRL+SHIFT+A` ([`TextRenderer::display_label`]).

use std::collections::HashMap;

use super::classify::is_alpha;
use super::error::{InputError, InputResult};
use super::event::KeyEvent;
use super::keys::{KeyCode, ModifierCombination};

/// Label returned when an event has neither a key nor a modifier.
pub const NO_LABEL: &str = "\\none\\";

/// Built-in glyphs. Printable keys map to their character, non-printable keys
/// to a backslash-delimited tag.
const DEFAULT_GLYPHS: [(KeyCode, &str); 97] = [
    (KeyCode::None, ""),
    (KeyCode::A, "a"),
    (KeyCode::B, "b"),
    (KeyCode::C, "c"),
    (KeyCode::D, "d"),
    (KeyCode::E, "e"),
    (KeyCode::F, "f"),
    (KeyCode::G, "g"),
    (KeyCode::H, "h"),
    (KeyCode::I, "i"),
    (KeyCode::J, "j"),
    (KeyCode::K, "k"),
    (KeyCode::L, "l"),
    (KeyCode::M, "m"),
    (KeyCode::N, "n"),
    (KeyCode::O, "o"),
    (KeyCode::P, "p"),
    (KeyCode::Q, "q"),
    (KeyCode::R, "r"),
    (KeyCode::S, "s"),
    (KeyCode::T, "t"),
    (KeyCode::U, "u"),
    (KeyCode::V, "v"),
    (KeyCode::W, "w"),
    (KeyCode::X, "x"),
    (KeyCode::Y, "y"),
    (KeyCode::Z, "z"),
    (KeyCode::Digit1, "1"),
    (KeyCode::Digit2, "2"),
    (KeyCode::Digit3, "3"),
    (KeyCode::Digit4, "4"),
    (KeyCode::Digit5, "5"),
    (KeyCode::Digit6, "6"),
    (KeyCode::Digit7, "7"),
    (KeyCode::Digit8, "8"),
    (KeyCode::Digit9, "9"),
    (KeyCode::Digit0, "0"),
    (KeyCode::Minus, "-"),
    (KeyCode::Plus, "+"),
    (KeyCode::BracketLeft, "["),
    (KeyCode::BracketRight, "]"),
    (KeyCode::Backslash, "\\"),
    (KeyCode::Slash, "/"),
    (KeyCode::Period, "."),
    (KeyCode::Semicolon, ";"),
    (KeyCode::Apostrophe, "'"),
    (KeyCode::Star, "*"),
    (KeyCode::Comma, ","),
    (KeyCode::AngleBracketLeft, "<"),
    (KeyCode::AngleBracketRight, ">"),
    (KeyCode::Question, "?"),
    (KeyCode::Pipe, "|"),
    (KeyCode::CurlyBracketLeft, "{"),
    (KeyCode::CurlyBracketRight, "}"),
    (KeyCode::Quotes, "\""),
    (KeyCode::Colon, ":"),
    (KeyCode::Backtick, "`"),
    (KeyCode::Accent, "~"),
    (KeyCode::Exclamation, "!"),
    (KeyCode::At, "@"),
    (KeyCode::Hash, "#"),
    (KeyCode::Dollar, "$"),
    (KeyCode::Percent, "%"),
    (KeyCode::Hat, "^"),
    (KeyCode::Ampersand, "&"),
    (KeyCode::LeftParenthesis, "("),
    (KeyCode::RightParenthesis, ")"),
    (KeyCode::Underscore, "_"),
    (KeyCode::Equals, "="),
    (KeyCode::Tab, "\t"),
    (KeyCode::Backspace, "\\backspace\\"),
    (KeyCode::Escape, "\\esc\\"),
    (KeyCode::Home, "\\home\\"),
    (KeyCode::Insert, "\\insert\\"),
    (KeyCode::Delete, "\\delete\\"),
    (KeyCode::PageDown, "\\pg-down\\"),
    (KeyCode::PageUp, "\\pg-up\\"),
    (KeyCode::ScrollLock, "\\scroll-lock\\"),
    (KeyCode::PauseBreak, "\\pause-break\\"),
    (KeyCode::ArrowUp, "\\^\\"),
    (KeyCode::ArrowDown, "\\v\\"),
    (KeyCode::ArrowLeft, "\\<\\"),
    (KeyCode::ArrowRight, "\\>\\"),
    (KeyCode::Enter, "\n"),
    (KeyCode::End, "\\end\\"),
    (KeyCode::F1, "\\f1\\"),
    (KeyCode::F2, "\\f2\\"),
    (KeyCode::F3, "\\f3\\"),
    (KeyCode::F4, "\\f4\\"),
    (KeyCode::F5, "\\f5\\"),
    (KeyCode::F6, "\\f6\\"),
    (KeyCode::F7, "\\f7\\"),
    (KeyCode::F8, "\\f8\\"),
    (KeyCode::F9, "\\f9\\"),
    (KeyCode::F10, "\\f10\\"),
    (KeyCode::F11, "\\f11\\"),
    (KeyCode::F12, "\\f12\\"),
];

const DEFAULT_MODIFIER_LABELS: [(ModifierCombination, &str); 8] = [
    (ModifierCombination::None, ""),
    (ModifierCombination::Shift, "Shift"),
    (ModifierCombination::Ctrl, "Ctrl"),
    (ModifierCombination::Alt, "Alt"),
    (ModifierCombination::CtrlShift, "Ctrl+Shift"),
    (ModifierCombination::CtrlAlt, "Ctrl+Alt"),
    (ModifierCombination::ShiftAlt, "Shift+Alt"),
    (ModifierCombination::CtrlShiftAlt, "Ctrl+Shift+Alt"),
];

/// Converts key events into inserted text and human-readable labels.
///
/// The tables are built once and never change afterwards, so a renderer can
/// be shared across threads by reference.
///
/// # Example
///
/// ```
/// use keyclass_core::input::{KeyCode, KeyEvent, ModifierCombination, TextRenderer};
///
/// let renderer = TextRenderer::new();
/// let event = KeyEvent::pressed(KeyCode::A, ModifierCombination::Shift);
/// assert_eq!(renderer.literal_text(&event), "A");
/// assert_eq!(renderer.display_label(&event), "SHIFT+A");
/// ```
#[derive(Debug, Clone)]
pub struct TextRenderer {
    glyphs: HashMap<KeyCode, String>,
    modifier_labels: HashMap<ModifierCombination, String>,
}

static_assertions::assert_impl_all!(TextRenderer: Send, Sync);

impl TextRenderer {
    /// Create a renderer with the built-in US-layout glyphs.
    pub fn new() -> Self {
        let renderer = Self {
            glyphs: DEFAULT_GLYPHS
                .iter()
                .map(|&(key, glyph)| (key, glyph.to_owned()))
                .collect(),
            modifier_labels: DEFAULT_MODIFIER_LABELS
                .iter()
                .map(|&(modifier, label)| (modifier, label.to_owned()))
                .collect(),
        };
        log::debug!(
            "Built text renderer with {} glyphs and {} modifier labels",
            renderer.glyphs.len(),
            renderer.modifier_labels.len()
        );
        renderer
    }

    /// Create a renderer from caller-supplied tables.
    ///
    /// Every [`KeyCode`] and every [`ModifierCombination`] must have an entry;
    /// the first missing one is reported as an error. Later duplicates
    /// replace earlier ones.
    pub fn from_tables<G, M, S, T>(glyphs: G, modifier_labels: M) -> InputResult<Self>
    where
        G: IntoIterator<Item = (KeyCode, S)>,
        M: IntoIterator<Item = (ModifierCombination, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let glyphs: HashMap<KeyCode, String> = glyphs
            .into_iter()
            .map(|(key, glyph)| (key, glyph.into()))
            .collect();
        let modifier_labels: HashMap<ModifierCombination, String> = modifier_labels
            .into_iter()
            .map(|(modifier, label)| (modifier, label.into()))
            .collect();

        if let Some(key) = KeyCode::ALL.into_iter().find(|k| !glyphs.contains_key(k)) {
            return Err(InputError::MissingGlyph(key));
        }
        if let Some(modifier) = ModifierCombination::ALL
            .into_iter()
            .find(|m| !modifier_labels.contains_key(m))
        {
            return Err(InputError::MissingModifierLabel(modifier));
        }

        log::debug!(
            "Built custom text renderer with {} glyphs and {} modifier labels",
            glyphs.len(),
            modifier_labels.len()
        );
        Ok(Self {
            glyphs,
            modifier_labels,
        })
    }

    /// Look up the raw glyph for a key.
    pub fn glyph(&self, key: KeyCode) -> InputResult<&str> {
        self.glyphs
            .get(&key)
            .map(String::as_str)
            .ok_or(InputError::MissingGlyph(key))
    }

    /// Look up the raw label for a modifier combination.
    pub fn modifier_label(&self, modifier: ModifierCombination) -> InputResult<&str> {
        self.modifier_labels
            .get(&modifier)
            .map(String::as_str)
            .ok_or(InputError::MissingModifierLabel(modifier))
    }

    /// The text this keystroke inserts into a text field.
    ///
    /// Letters typed with Shift are upper-cased; every other glyph is returned
    /// as stored.
    ///
    /// # Panics
    ///
    /// Panics if the key has no glyph. Renderers built through [`new`] or
    /// [`from_tables`] always cover every key.
    ///
    /// [`new`]: Self::new
    /// [`from_tables`]: Self::from_tables
    pub fn literal_text(&self, event: &KeyEvent) -> String {
        let glyph = self.require_glyph(event.key());
        if is_alpha(event) && event.modifier() == ModifierCombination::Shift {
            glyph.to_uppercase()
        } else {
            glyph.to_owned()
        }
    }

    /// A label for the key combination, e.g. `CTRL+SHIFT+A`.
    ///
    /// Both parts are upper-cased. A missing part is omitted together with
    /// the `+`; when both are missing the result is [`NO_LABEL`].
    ///
    /// # Panics
    ///
    /// Panics if the key or modifier has no table entry.
    pub fn display_label(&self, event: &KeyEvent) -> String {
        let key = self.require_glyph(event.key()).to_uppercase();
        let modifier = self.require_modifier_label(event.modifier()).to_uppercase();

        match (modifier.is_empty(), key.is_empty()) {
            (false, false) => format!("{modifier}+{key}"),
            (true, false) => key,
            (false, true) => modifier,
            (true, true) => NO_LABEL.to_owned(),
        }
    }

    fn require_glyph(&self, key: KeyCode) -> &str {
        match self.glyph(key) {
            Ok(glyph) => glyph,
            Err(err) => panic!("incomplete glyph table: {err}"),
        }
    }

    fn require_modifier_label(&self, modifier: ModifierCombination) -> &str {
        match self.modifier_label(modifier) {
            Ok(label) => label,
            Err(err) => panic!("incomplete modifier table: {err}"),
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
