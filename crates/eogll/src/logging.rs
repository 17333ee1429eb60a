//! Logging setup
//!
//! Per-frame calls log at `trace`, resize and focus changes at `debug`,
//! startup at `info`, GLFW errors at `error`.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging, falling back to `level` when `RUST_LOG` is unset
///
/// Safe to call more than once; only the first call installs a logger.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_does_not_panic() {
        init_with_level("debug");
        init_with_level("trace");
        info!("logging initialized twice");
    }
}
