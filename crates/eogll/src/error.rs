//! Library error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while setting up the library or creating windows
#[derive(Error, Debug)]
pub enum EogllError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed: {0}")]
    Initialization(String),

    /// The platform refused to create the window or its context
    #[error("Failed to create {width}x{height} window \"{title}\"")]
    WindowCreation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested title
        title: String,
    },

    /// Window parameters rejected before reaching the platform
    #[error("Invalid window parameters: {0}")]
    InvalidWindowParameters(String),

    /// Configuration could not be loaded or was invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, EogllError>;
