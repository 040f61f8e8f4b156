//! Application context.

use keyclass_core::input::{ModifierCombination, TextRenderer};

/// Application context available during all handler callbacks.
///
/// Owns the [`TextRenderer`] used to label and render key events, and
/// collects requests (title changes, exit) that the [`App`](crate::App)
/// applies after the callback returns.
pub struct AppContext {
    /// Renderer shared by all callbacks.
    pub(crate) renderer: TextRenderer,
    /// Modifier combination last reported by the window.
    pub(crate) modifiers: ModifierCombination,
    /// Number of key events dispatched so far.
    pub(crate) events_dispatched: u64,
    /// Title to apply to the window, if changed.
    pub(crate) pending_title: Option<String>,
    /// Whether the handler asked to exit.
    pub(crate) exit_requested: bool,
}

impl AppContext {
    /// Create a context around a renderer.
    pub fn new(renderer: TextRenderer) -> Self {
        Self {
            renderer,
            modifiers: ModifierCombination::None,
            events_dispatched: 0,
            pending_title: None,
            exit_requested: false,
        }
    }

    /// Get the text renderer.
    pub fn renderer(&self) -> &TextRenderer {
        &self.renderer
    }

    /// Get the modifier combination currently held.
    pub fn modifiers(&self) -> ModifierCombination {
        self.modifiers
    }

    /// Get the number of key events dispatched so far.
    pub fn events_dispatched(&self) -> u64 {
        self.events_dispatched
    }

    /// Change the window title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.pending_title = Some(title.into());
    }

    /// Ask the application to exit after the current callback.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Take the pending title change, if any.
    pub(crate) fn take_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(TextRenderer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_taken_once() {
        let mut ctx = AppContext::default();
        assert_eq!(ctx.take_title(), None);

        ctx.set_title("first");
        ctx.set_title("second");
        assert_eq!(ctx.take_title().as_deref(), Some("second"));
        assert_eq!(ctx.take_title(), None);
    }

    #[test]
    fn test_exit_request() {
        let mut ctx = AppContext::default();
        assert!(!ctx.exit_requested);
        ctx.request_exit();
        assert!(ctx.exit_requested);
    }
}
