//! Configuration system
//!
//! Window and logging settings can be loaded from TOML or RON files; the
//! format is picked from the file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hints::WindowHints;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parsed but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Requested OpenGL context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlContextConfig {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Request a core profile context
    pub core_profile: bool,
}

impl GlContextConfig {
    /// Request `major.minor` with a core profile
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            core_profile: true,
        }
    }

    /// Validate the requested version
    pub fn validate(&self) -> Result<(), ConfigError> {
        // core profiles start at 3.2
        if self.core_profile && (self.major, self.minor) < (3, 2) {
            return Err(ConfigError::Invalid(format!(
                "core profile requires OpenGL 3.2 or newer, got {}.{}",
                self.major, self.minor
            )));
        }
        if self.major == 0 {
            return Err(ConfigError::Invalid("OpenGL major version cannot be 0".to_string()));
        }
        Ok(())
    }
}

impl Default for GlContextConfig {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// # Window Configuration
///
/// Everything needed to create the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Creation hints
    pub hints: WindowHints,
    /// OpenGL context request
    pub gl: GlContextConfig,
}

impl WindowConfig {
    /// Create a window configuration with default hints
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            hints: WindowHints::default(),
            gl: GlContextConfig::default(),
        }
    }

    /// Set creation hints
    #[must_use]
    pub const fn with_hints(mut self, hints: WindowHints) -> Self {
        self.hints = hints;
        self
    }

    /// Set the OpenGL context request
    #[must_use]
    pub const fn with_gl(mut self, gl: GlContextConfig) -> Self {
        self.gl = gl;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.title.contains('\0') {
            return Err(ConfigError::Invalid("window title must not contain NUL".to_string()));
        }
        self.gl.validate()
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(800, 600, "EOGLL")
    }
}

/// # Application Configuration
///
/// Top-level configuration: logging plus the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EogllConfig {
    /// Default log filter, used when `RUST_LOG` is not set
    pub log_level: String,
    /// Main window
    pub window: WindowConfig,
}

impl EogllConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level \"{}\"",
                self.log_level
            )));
        }
        self.window.validate()
    }
}

impl Default for EogllConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Config for EogllConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("eogll-{}-{name}", std::process::id()))
    }

    fn sample() -> EogllConfig {
        EogllConfig {
            log_level: "debug".to_string(),
            window: WindowConfig::new(1280, 720, "Sample")
                .with_hints(WindowHints::default().with_transparent(true))
                .with_gl(GlContextConfig::new(4, 1)),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EogllConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.gl, GlContextConfig::new(3, 3));
        assert_eq!(config.window.hints, WindowHints::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("config.toml");
        let config = sample();
        config.save_to_file(&path).unwrap();

        let loaded = EogllConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("config.ron");
        let config = sample();
        config.save_to_file(&path).unwrap();

        let loaded = EogllConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: EogllConfig = toml::from_str(
            r#"
            [window]
            title = "Partial"

            [window.hints]
            floating = true
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.window.title, "Partial");
        assert_eq!(config.window.width, 800);
        assert!(config.window.hints.floating());
        assert!(config.window.hints.resizable());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = EogllConfig::default().save_to_file(temp_path("config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EogllConfig::load_from_file(temp_path("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = EogllConfig::default();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        let window = WindowConfig::new(0, 600, "x");
        assert!(window.validate().is_err());

        let gl = GlContextConfig::new(2, 1);
        assert!(gl.validate().is_err());
        let legacy = GlContextConfig {
            core_profile: false,
            ..GlContextConfig::new(2, 1)
        };
        assert!(legacy.validate().is_ok());
    }
}
