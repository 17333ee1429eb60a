//! # EOGLL
//!
//! A small windowing layer over GLFW that creates OpenGL windows and tracks
//! per-frame input.
//!
//! ## Features
//!
//! - **Window Hints**: Plain value type describing how a window is created
//! - **Scoped Resources**: Windows are destroyed when dropped
//! - **Input State**: Pressed/released/down tracking for keys and mouse buttons
//! - **Configuration**: TOML and RON config files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eogll::prelude::*;
//!
//! fn main() -> Result<(), EogllError> {
//!     eogll::logging::init();
//!
//!     let mut eogll = Eogll::init()?;
//!     let mut window = eogll.create_window(800, 600, "EOGLL", &WindowHints::default())?;
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!         if window.key_pressed(Key::Escape) {
//!             window.set_should_close(true);
//!         }
//!         window.swap_buffers();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod error;
pub mod hints;
pub mod input;
pub mod logging;
pub mod window;

pub use context::Eogll;
pub use error::{EogllError, Result};
pub use hints::WindowHints;
pub use window::Window;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, EogllConfig, GlContextConfig, WindowConfig},
        input::{Action, CursorMode, InputState, Key, MouseButton},
        Eogll, EogllError, Window, WindowHints,
    };
}
