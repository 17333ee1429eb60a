//! Library initialization and window creation

use log::{debug, error, info};

use crate::config::{GlContextConfig, WindowConfig};
use crate::error::{EogllError, Result};
use crate::hints::WindowHints;
use crate::window::Window;

const VERSION_STRING: &str = concat!("EOGLL ", env!("CARGO_PKG_VERSION"));

/// Initialized library handle
///
/// GLFW stays initialized while this value or any window created from it is
/// alive, and is terminated once the last of them is dropped.
pub struct Eogll {
    glfw: glfw::Glfw,
}

impl Eogll {
    /// Initialize GLFW and install the error logger
    ///
    /// Calling this again while the library is already initialized is fine.
    pub fn init() -> Result<Self> {
        let glfw = glfw::init(log_glfw_error)
            .map_err(|e| EogllError::Initialization(format!("{e:?}")))?;

        info!("{VERSION_STRING}");
        info!("GLFW {}", glfw::get_version_string());

        Ok(Self { glfw })
    }

    /// `"EOGLL <major>.<minor>.<patch>"`
    pub const fn version_string() -> &'static str {
        VERSION_STRING
    }

    /// Version string of the linked GLFW library
    pub fn glfw_version_string() -> String {
        glfw::get_version_string()
    }

    /// Create a window with an OpenGL 3.3 core context
    pub fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: &WindowHints,
    ) -> Result<Window> {
        self.create_window_with_context(width, height, title, hints, &GlContextConfig::default())
    }

    /// Create a window requesting a specific OpenGL context
    pub fn create_window_with_context(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
        hints: &WindowHints,
        gl: &GlContextConfig,
    ) -> Result<Window> {
        Window::create(&mut self.glfw, width, height, title, hints, gl)
    }

    /// Create a window described by a config section
    pub fn create_window_from_config(&mut self, config: &WindowConfig) -> Result<Window> {
        config.validate()?;
        self.create_window_with_context(
            config.width,
            config.height,
            &config.title,
            &config.hints,
            &config.gl,
        )
    }
}

impl Drop for Eogll {
    fn drop(&mut self) {
        debug!("Releasing EOGLL context");
    }
}

#[allow(clippy::needless_pass_by_value)]
fn log_glfw_error(error: glfw::Error, description: String) {
    error!("GLFW error {error:?}: {description}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_format() {
        let version = Eogll::version_string();
        assert!(version.starts_with("EOGLL "));
        let numbers: Vec<&str> = version["EOGLL ".len()..].split('.').collect();
        assert_eq!(numbers.len(), 3);
        assert!(numbers.iter().all(|n| n.parse::<u32>().is_ok()));
    }
}
