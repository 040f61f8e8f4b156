//! Key viewer: logs every key event with its label and echoes typed text in
//! the window title.
//!
//! ```bash
//! cargo run -p keyclass-app --bin key_viewer -- --releases
//! ```

use keyclass_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs};
use keyclass_core::input::{
    KeyCode, KeyEvent, KeyState, TextRenderer, is_control, is_function_row, is_text,
};

/// Apply one keystroke to a single-line text buffer.
///
/// Returns `true` if the line changed.
fn edit_line(line: &mut String, renderer: &TextRenderer, event: &KeyEvent) -> bool {
    if event.state() != KeyState::Down {
        return false;
    }
    if is_text(event) {
        line.push_str(&renderer.literal_text(event));
        return true;
    }
    if event.key() == KeyCode::Backspace {
        return line.pop().is_some();
    }
    false
}

fn kind(event: &KeyEvent) -> &'static str {
    if is_text(event) {
        "text"
    } else if is_control(event) {
        "control"
    } else if is_function_row(event) {
        "function"
    } else {
        "shortcut"
    }
}

struct KeyViewer {
    title: String,
    line: String,
}

impl KeyViewer {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            line: String::new(),
        }
    }
}

impl AppHandler for KeyViewer {
    fn on_init(&mut self, ctx: &mut AppContext) {
        log::info!("Press keys in the window; close it to exit");
        ctx.set_title(format!("{} - type something", self.title));
    }

    fn on_key(&mut self, ctx: &mut AppContext, event: KeyEvent) {
        let renderer = ctx.renderer();
        log::info!(
            "{:<4} {:<8} {}",
            match event.state() {
                KeyState::Down => "down",
                KeyState::Up => "up",
                KeyState::None => "none",
            },
            kind(&event),
            renderer.display_label(&event)
        );

        if edit_line(&mut self.line, renderer, &event) {
            log::debug!("Line is now {:?}", self.line);
            ctx.set_title(format!("{} - {}", self.title, self.line));
        }
    }

    fn on_shutdown(&mut self, ctx: &mut AppContext) {
        log::info!(
            "Dispatched {} key events, final line: {:?}",
            ctx.events_dispatched(),
            self.line
        );
    }
}

fn main() {
    let args = DefaultAppArgs::parse();
    let viewer = KeyViewer::new(args.window_title());
    App::run(viewer, args);
}
