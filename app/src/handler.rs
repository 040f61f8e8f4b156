//! Application handler trait.

use keyclass_core::input::KeyEvent;

use crate::context::AppContext;

/// Trait for handling application events.
///
/// # Lifecycle
///
/// 1. `on_init` - Called once after the window is created
/// 2. `on_key` - Called for every keyboard event that maps to an engine key
/// 3. `on_shutdown` - Called when the application is closing
///
/// # Example
///
/// ```ignore
/// use keyclass_app::{AppContext, AppHandler};
/// use keyclass_core::input::KeyEvent;
///
/// struct MyApp;
///
/// impl AppHandler for MyApp {
///     fn on_key(&mut self, ctx: &mut AppContext, event: KeyEvent) {
///         log::info!("{}", ctx.renderer().display_label(&event));
///     }
/// }
/// ```
pub trait AppHandler {
    /// Called once when the application initializes.
    fn on_init(&mut self, _ctx: &mut AppContext) {}

    /// Called when a key is pressed (and released, if the arguments ask for
    /// releases).
    ///
    /// Keys the backend adapter cannot map are not dispatched.
    fn on_key(&mut self, ctx: &mut AppContext, event: KeyEvent);

    /// Called when the user requests to close the window.
    ///
    /// Return `true` to allow the window to close (the default), `false` to
    /// keep running.
    fn on_close_requested(&mut self, _ctx: &mut AppContext) -> bool {
        true
    }

    /// Called when the application is closing.
    fn on_shutdown(&mut self, _ctx: &mut AppContext) {}
}
