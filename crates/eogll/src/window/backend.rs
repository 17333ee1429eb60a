//! Platform contract behind [`Window`](super::Window)
//!
//! The public window type forwards every platform call through this trait.
//! GLFW is the only production implementation; tests plug in a recording
//! backend so window bookkeeping can be checked without a display.

use glfw::WindowEvent;

use super::placement::Rect;
use crate::input::CursorMode;

/// Internal trait for window backend implementations
///
/// Window operations must happen on the main thread, so no `Send` bound.
pub(crate) trait WindowBackend {
    /// Whether a close was requested by the user or the application
    fn should_close(&self) -> bool;

    /// Raise or clear the close request
    fn set_should_close(&mut self, should_close: bool);

    /// Pump the platform queue and drain the events it produced
    fn poll_events(&mut self) -> Vec<WindowEvent>;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Drawable size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Screen-space rectangle of the client area
    fn bounds(&self) -> Rect;

    /// Resize the client area
    fn set_size(&mut self, width: u32, height: u32);

    /// Move the client area's top-left corner
    fn set_position(&mut self, x: i32, y: i32);

    /// Cursor position queried from the platform
    fn cursor_position(&self) -> (f64, f64);

    /// Warp the cursor
    fn set_cursor_position(&mut self, x: f64, y: f64);

    /// Change cursor visibility and locking
    fn set_cursor_mode(&mut self, mode: CursorMode);

    /// Whether the window currently has input focus
    fn is_focused(&self) -> bool;

    /// Connected monitors as position plus current video mode size
    fn monitors(&mut self) -> Vec<Rect>;

    /// The primary monitor, if the platform reports one with a video mode
    fn primary_monitor(&mut self) -> Option<Rect>;
}
