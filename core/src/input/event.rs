//! Keyboard events.

use super::keys::{KeyCategory, KeyCode, KeyState, ModifierCombination};

/// A single key transition together with the modifiers held at the time.
///
/// Events are raw facts: any key/modifier/state combination can be
/// constructed, and it is up to [`classify`](super::classify) to decide what
/// an event means. Events are `Copy` and never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyEvent {
    key: KeyCode,
    modifier: ModifierCombination,
    state: KeyState,
}

impl KeyEvent {
    /// The empty event: no key, no modifier, no transition.
    pub const NONE: KeyEvent =
        KeyEvent::new(KeyCode::None, ModifierCombination::None, KeyState::None);

    /// Create a new event.
    pub const fn new(key: KeyCode, modifier: ModifierCombination, state: KeyState) -> Self {
        Self {
            key,
            modifier,
            state,
        }
    }

    /// Create a key-down event.
    pub const fn pressed(key: KeyCode, modifier: ModifierCombination) -> Self {
        Self::new(key, modifier, KeyState::Down)
    }

    /// Create a key-up event.
    pub const fn released(key: KeyCode, modifier: ModifierCombination) -> Self {
        Self::new(key, modifier, KeyState::Up)
    }

    /// The key that changed state, or [`KeyCode::None`].
    #[inline]
    pub const fn key(&self) -> KeyCode {
        self.key
    }

    /// The modifier combination held during the transition.
    #[inline]
    pub const fn modifier(&self) -> ModifierCombination {
        self.modifier
    }

    /// The transition direction.
    #[inline]
    pub const fn state(&self) -> KeyState {
        self.state
    }

    /// Category tag of the event's key.
    #[inline]
    pub const fn category(&self) -> KeyCategory {
        self.key.category()
    }
}
