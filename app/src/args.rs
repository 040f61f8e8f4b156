//! Command line arguments trait and default implementation.
//!
//! Uses clap for CLI parsing with help text (`--help`) and validation.

/// Trait for parsing command line arguments.
///
/// Implement this trait to customize how your application is configured.
/// Every getter has a default, so only the options you care about need
/// overriding.
///
/// # Example
///
/// ```ignore
/// use keyclass_app::AppArgs;
///
/// struct MyArgs {
///     verbose: bool,
/// }
///
/// impl AppArgs for MyArgs {
///     fn parse() -> Self {
///         Self {
///             verbose: std::env::args().any(|a| a == "--verbose"),
///         }
///     }
///
///     fn report_releases(&self) -> bool {
///         self.verbose
///     }
/// }
/// ```
pub trait AppArgs: Sized {
    /// Parse command line arguments.
    fn parse() -> Self;

    /// Get the initial window width.
    ///
    /// Default: 640
    fn window_width(&self) -> u32 {
        640
    }

    /// Get the initial window height.
    ///
    /// Default: 240
    fn window_height(&self) -> u32 {
        240
    }

    /// Get the window title.
    ///
    /// Default: "Keyclass"
    fn window_title(&self) -> &str {
        "Keyclass"
    }

    /// Whether key-release events are dispatched to the handler.
    ///
    /// Default: false (only presses)
    fn report_releases(&self) -> bool {
        false
    }

    /// Get the maximum number of key events to dispatch before auto-exit.
    ///
    /// Useful for scripted runs that feed a fixed sequence of keys.
    ///
    /// Default: `None` (run until closed)
    fn max_events(&self) -> Option<u64> {
        None
    }
}

// ============================================================================
// Default App Args
// ============================================================================

/// Default command line arguments implementation.
///
/// # Examples
///
/// ```bash
/// # Show help
/// ./key_viewer --help
///
/// # Report releases as well as presses
/// ./key_viewer --releases
///
/// # Exit after 20 key events
/// ./key_viewer --max-events 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultAppArgs {
    width: u32,
    height: u32,
    title: String,
    report_releases: bool,
    max_events: Option<u64>,
}

impl Default for DefaultAppArgs {
    fn default() -> Self {
        Self {
            width: 640,
            height: 240,
            title: "Keyclass".to_string(),
            report_releases: false,
            max_events: None,
        }
    }
}

impl DefaultAppArgs {
    /// Create new default args with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Dispatch key-release events too.
    pub fn with_releases(mut self, report: bool) -> Self {
        self.report_releases = report;
        self
    }

    /// Set the maximum number of dispatched key events.
    pub fn with_max_events(mut self, max_events: u64) -> Self {
        self.max_events = Some(max_events);
        self
    }
}

mod native {
    use super::*;
    use clap::Parser;

    /// Keyclass application arguments.
    #[derive(Parser, Debug)]
    #[command(
        name = "Keyclass",
        about = "Inspect how key presses are classified and labelled",
        long_about = "Opens a window and reports every key event it receives.\n\n\
            Each press is logged with its keybinding label (e.g. CTRL+SHIFT+A).\n\
            Text keystrokes are appended to the line shown in the window title,\n\
            Backspace removes the last character.\n\
            \n\
            Set RUST_LOG=debug or RUST_LOG=trace for more detail.",
        version
    )]
    pub(super) struct ClapArgs {
        /// Window title prefix.
        #[arg(long, default_value = "Keyclass")]
        pub title: String,

        /// Initial window width in pixels.
        #[arg(long, default_value = "640")]
        pub width: u32,

        /// Initial window height in pixels.
        #[arg(long, default_value = "240")]
        pub height: u32,

        /// Report key releases as well as presses.
        #[arg(long)]
        pub releases: bool,

        /// Exit after dispatching N key events.
        #[arg(long)]
        pub max_events: Option<u64>,
    }

    impl From<ClapArgs> for DefaultAppArgs {
        fn from(args: ClapArgs) -> Self {
            if args.max_events == Some(0) {
                log::warn!("--max-events 0 exits on the first key event");
            }

            Self {
                width: args.width,
                height: args.height,
                title: args.title,
                report_releases: args.releases,
                max_events: args.max_events,
            }
        }
    }
}

impl AppArgs for DefaultAppArgs {
    fn parse() -> Self {
        use clap::Parser;
        native::ClapArgs::parse().into()
    }

    fn window_width(&self) -> u32 {
        self.width
    }

    fn window_height(&self) -> u32 {
        self.height
    }

    fn window_title(&self) -> &str {
        &self.title
    }

    fn report_releases(&self) -> bool {
        self.report_releases
    }

    fn max_events(&self) -> Option<u64> {
        self.max_events
    }
}
