//! Window management using GLFW
//!
//! Creates an OpenGL window and context and forwards window operations to it.

use glfw::{Context, WindowEvent};
use log::{error, info};

use super::backend::WindowBackend;
use super::placement::Rect;
use crate::config::GlContextConfig;
use crate::error::{EogllError, Result};
use crate::hints::WindowHints;
use crate::input::CursorMode;

/// GLFW window wrapper; the native window is destroyed when this drops
pub(crate) struct GlfwBackend {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
}

impl GlfwBackend {
    pub(crate) fn create(
        glfw: &mut glfw::Glfw,
        width: u32,
        height: u32,
        title: &str,
        hints: WindowHints,
        gl: &GlContextConfig,
    ) -> Result<Self> {
        glfw.default_window_hints();
        for hint in hints.to_glfw() {
            glfw.window_hint(hint);
        }

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(gl.major, gl.minor));
        if gl.core_profile {
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(
                glfw::OpenGlProfileHint::Core,
            ));
        }
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                error!("Failed to create window \"{title}\" ({width}x{height})");
                EogllError::WindowCreation {
                    width,
                    height,
                    title: title.to_string(),
                }
            })?;

        window.set_framebuffer_size_polling(true);
        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_focus_polling(true);
        window.set_close_polling(true);
        window.make_current();

        info!(
            "Created window \"{title}\" ({width}x{height}), OpenGL {}.{}{}",
            gl.major,
            gl.minor,
            if gl.core_profile { " core" } else { "" }
        );

        Ok(Self {
            glfw: glfw.clone(),
            window,
            events,
        })
    }
}

impl WindowBackend for GlfwBackend {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .map(|(_, event)| event)
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (to_unsigned(width), to_unsigned(height))
    }

    fn bounds(&self) -> Rect {
        let (x, y) = self.window.get_pos();
        let (width, height) = self.window.get_size();
        Rect::new(x, y, width, height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.window.set_size(to_signed(width), to_signed(height));
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.window.set_pos(x, y);
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.window.get_cursor_pos()
    }

    fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.window.set_cursor_pos(x, y);
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.window.set_cursor_mode(mode.into());
    }

    fn is_focused(&self) -> bool {
        self.window.is_focused()
    }

    fn monitors(&mut self) -> Vec<Rect> {
        self.glfw.with_connected_monitors(|_, monitors| {
            monitors
                .iter()
                .filter_map(|monitor| monitor_area(monitor))
                .collect()
        })
    }

    fn primary_monitor(&mut self) -> Option<Rect> {
        self.glfw
            .with_primary_monitor(|_, monitor| monitor.and_then(|m| monitor_area(m)))
    }
}

fn monitor_area(monitor: &glfw::Monitor) -> Option<Rect> {
    let (x, y) = monitor.get_pos();
    let mode = monitor.get_video_mode()?;
    Some(Rect::new(x, y, to_signed(mode.width), to_signed(mode.height)))
}

fn to_unsigned(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

fn to_signed(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
