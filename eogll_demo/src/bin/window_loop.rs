//! Opens a window and runs the frame loop until it is closed
//!
//! Usage: `window_loop [config.toml|config.ron]`
//!
//! Escape closes the window, C centers it, Tab toggles a locked cursor.

use eogll::prelude::*;
use log::{error, info};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match EogllConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => EogllConfig::default(),
    };

    eogll::logging::init_with_level(&config.log_level);

    if let Err(e) = run(&config) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &EogllConfig) -> Result<(), EogllError> {
    config.validate()?;

    let mut eogll = Eogll::init()?;
    let mut window = eogll.create_window_from_config(&config.window)?;
    let mut cursor_locked = false;
    let mut frames: u64 = 0;

    while !window.should_close() {
        window.poll_events();

        if window.key_pressed(Key::Escape) {
            window.set_should_close(true);
        }
        if window.key_pressed(Key::C) {
            window.center();
        }
        if window.key_pressed(Key::Tab) {
            cursor_locked = !cursor_locked;
            window.set_cursor_mode(if cursor_locked {
                CursorMode::Disabled
            } else {
                CursorMode::Normal
            });
        }
        if window.mouse_pressed(MouseButton::Button1) {
            let (x, y) = window.mouse_position();
            info!("Click at ({x:.1}, {y:.1})");
        }

        window.swap_buffers();
        frames += 1;
    }

    let (width, height) = window.size();
    info!("Closed after {frames} frames at {width}x{height}");
    Ok(())
}
