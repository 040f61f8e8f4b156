//! # Keyclass App
//!
//! winit backend adapter and a minimal windowed application framework for
//! inspecting keyboard input.
//!
//! ## Overview
//!
//! - [`input`] - Maps winit key codes, states and modifiers to engine key events
//! - [`AppHandler`] - Trait for handling key events
//! - [`AppArgs`] - Trait for parsing command line arguments
//! - [`App`] - Main application struct that manages the window and dispatch
//!
//! ## Example
//!
//! ```ignore
//! use keyclass_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs};
//! use keyclass_core::input::KeyEvent;
//!
//! struct MyApp;
//!
//! impl AppHandler for MyApp {
//!     fn on_key(&mut self, ctx: &mut AppContext, event: KeyEvent) {
//!         log::info!("{}", ctx.renderer().display_label(&event));
//!     }
//! }
//!
//! fn main() {
//!     let args = DefaultAppArgs::parse();
//!     App::run(MyApp, args);
//! }
//! ```

mod app;
mod args;
mod context;
mod handler;
pub mod input;

pub use app::App;
pub use args::{AppArgs, DefaultAppArgs};
pub use context::AppContext;
pub use handler::AppHandler;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
///
/// This should be called before using any app functionality.
pub fn init() {
    log::info!("Keyclass App v{} initialized", VERSION);
}
