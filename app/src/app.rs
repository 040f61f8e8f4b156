//! Main application struct and event loop.

use keyclass_core::input::{KeyEvent, KeyState};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use crate::args::AppArgs;
use crate::context::AppContext;
use crate::handler::AppHandler;
use crate::input;

/// Main application struct that manages the window and key dispatch.
///
/// The `App` struct is generic over:
/// - `H`: The handler type that implements [`AppHandler`]
/// - `A`: The arguments type that implements [`AppArgs`]
///
/// Keyboard input is translated by the [`input`](crate::input) adapter; keys
/// that do not map to an engine key are dropped before reaching the handler.
///
/// # Example
///
/// ```ignore
/// use keyclass_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs};
/// use keyclass_core::input::KeyEvent;
///
/// struct MyApp;
///
/// impl AppHandler for MyApp {
///     fn on_key(&mut self, ctx: &mut AppContext, event: KeyEvent) {
///         log::info!("{}", ctx.renderer().display_label(&event));
///     }
/// }
///
/// fn main() {
///     let args = DefaultAppArgs::parse();
///     App::run(MyApp, args);
/// }
/// ```
pub struct App<H, A>
where
    H: AppHandler,
    A: AppArgs,
{
    handler: H,
    args: A,
    window: Option<Window>,
    context: AppContext,
    modifiers: ModifiersState,
    running: bool,
    initialized: bool,
}

impl<H, A> App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    /// Create a new application.
    pub fn new(handler: H, args: A) -> Self {
        Self {
            handler,
            args,
            window: None,
            context: AppContext::default(),
            modifiers: ModifiersState::empty(),
            running: true,
            initialized: false,
        }
    }

    /// Run the application with the given handler and arguments.
    ///
    /// Installs the logger, creates the event loop and window, and dispatches
    /// keyboard input until the window closes.
    ///
    /// # Panics
    ///
    /// Panics if the event loop cannot be created.
    pub fn run(handler: H, args: A) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        keyclass_core::init();
        crate::init();

        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = Self::new(handler, args);
        event_loop.run_app(&mut app).expect("Event loop error");
    }

    /// Record a modifier change reported by the window.
    fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = state;
        self.context.modifiers = input::map_modifiers(state);
        log::debug!("Modifiers changed to {:?}", self.context.modifiers);
    }

    /// Pass a translated key event to the handler.
    fn dispatch(&mut self, event: KeyEvent) {
        if !self.running {
            return;
        }
        if event.state() == KeyState::Up && !self.args.report_releases() {
            return;
        }

        self.context.events_dispatched += 1;
        self.handler.on_key(&mut self.context, event);
        self.apply_requests();

        if let Some(max_events) = self.args.max_events()
            && self.context.events_dispatched >= max_events
        {
            log::info!("Reached max events limit ({}), exiting", max_events);
            self.running = false;
        }
    }

    /// Apply title and exit requests made by the handler.
    fn apply_requests(&mut self) {
        if let Some(title) = self.context.take_title()
            && let Some(window) = &self.window
        {
            window.set_title(&title);
        }
        if self.context.exit_requested {
            self.running = false;
        }
    }

    /// Notify the handler and stop the event loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.running = false;
        if self.initialized {
            self.handler.on_shutdown(&mut self.context);
            self.initialized = false;
        }
        event_loop.exit();
    }
}

impl<H, A> ApplicationHandler for App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.args.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.args.window_width(),
                self.args.window_height(),
            ));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                log::info!("Window created");
                self.window = Some(window);

                self.handler.on_init(&mut self.context);
                self.initialized = true;
                self.apply_requests();
            }
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                if self.handler.on_close_requested(&mut self.context) {
                    self.shutdown(event_loop);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.update_modifiers(modifiers.state());
            }

            WindowEvent::Focused(false) => {
                // Modifier releases are not reported while unfocused
                self.update_modifiers(ModifiersState::empty());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key_event) = input::key_event_from_winit(&event, self.modifiers) {
                    self.dispatch(key_event);
                }
            }

            _ => {}
        }

        if !self.running {
            self.shutdown(event_loop);
        }
    }
}
