//! Window management subsystem
//!
//! [`Window`] is the application-facing type. It owns a platform backend
//! (GLFW in production) and keeps the state the platform only reports through
//! events: the drawable size, focus, and per-frame input.
//!
//! # Module Organization
//!
//! - **`backend`**: Internal trait defining the platform contract
//! - **`glfw_backend`**: GLFW implementation with an OpenGL context
//! - **`placement`**: Screen rectangles and centering

mod backend;
mod glfw_backend;
pub mod placement;

use glfw::WindowEvent;
use log::{debug, trace};

use crate::config::GlContextConfig;
use crate::context::Eogll;
use crate::error::{EogllError, Result};
use crate::hints::WindowHints;
use crate::input::{CursorMode, InputState, Key, MouseButton};

pub(crate) use backend::WindowBackend;
pub(crate) use glfw_backend::GlfwBackend;

/// An OpenGL window
///
/// Valid from creation until dropped; dropping destroys the native window.
///
/// Most programs drive it with a loop like this:
///
/// ```rust,no_run
/// # use eogll::{Window, WindowHints};
/// # fn main() -> eogll::Result<()> {
/// let mut window = Window::new(800, 600, "EOGLL", &WindowHints::default())?;
/// while !window.should_close() {
///     window.poll_events();
///     // draw
///     window.swap_buffers();
/// }
/// # Ok(())
/// # }
/// ```
pub struct Window {
    backend: Box<dyn WindowBackend>,
    input: InputState,
    events: Vec<WindowEvent>,
    width: u32,
    height: u32,
    focused: bool,
}

impl Window {
    /// Create a window, initializing the library if needed
    ///
    /// The window keeps GLFW alive for as long as it exists, so no separate
    /// [`Eogll`] value has to be held.
    pub fn new(width: u32, height: u32, title: &str, hints: &WindowHints) -> Result<Self> {
        Eogll::init()?.create_window(width, height, title, hints)
    }

    pub(crate) fn create(
        glfw: &mut glfw::Glfw,
        width: u32,
        height: u32,
        title: &str,
        hints: &WindowHints,
        gl: &GlContextConfig,
    ) -> Result<Self> {
        validate_parameters(width, height, title)?;
        trace!("{title} {width}x{height} {hints:?}");
        let backend = GlfwBackend::create(glfw, width, height, title, *hints, gl)?;
        Ok(Self::from_backend(Box::new(backend)))
    }

    pub(crate) fn from_backend(backend: Box<dyn WindowBackend>) -> Self {
        let (width, height) = backend.framebuffer_size();
        let focused = backend.is_focused();
        let (mouse_x, mouse_y) = backend.cursor_position();

        let mut input = InputState::new();
        input.set_mouse_position(mouse_x, mouse_y);

        Self {
            backend,
            input,
            events: Vec::new(),
            width,
            height,
            focused,
        }
    }

    /// Whether the window should close
    ///
    /// Normally set when the user clicks the close button, or by
    /// [`set_should_close`](Self::set_should_close).
    pub fn should_close(&self) -> bool {
        let should_close = self.backend.should_close();
        trace!("should_close = {should_close}");
        should_close
    }

    /// Request or cancel closing
    ///
    /// Lets a loop exit through its normal condition so cleanup stays in one
    /// place after the loop.
    pub fn set_should_close(&mut self, should_close: bool) {
        trace!("set_should_close({should_close})");
        self.backend.set_should_close(should_close);
    }

    /// Process pending events and start a new input frame
    ///
    /// Call once per frame. Updates the cached size, focus and input state.
    pub fn poll_events(&mut self) {
        trace!("poll_events");
        self.input.begin_frame();
        self.events = self.backend.poll_events();

        for event in &self.events {
            if self.input.handle_event(event) {
                continue;
            }
            match *event {
                WindowEvent::FramebufferSize(width, height) => {
                    debug!("Framebuffer size changed to {width}x{height}");
                    self.width = u32::try_from(width).unwrap_or(0);
                    self.height = u32::try_from(height).unwrap_or(0);
                }
                WindowEvent::Focus(focused) => {
                    debug!("Focus changed: {focused}");
                    self.focused = focused;
                }
                _ => {}
            }
        }
    }

    /// Present the frame
    pub fn swap_buffers(&mut self) {
        trace!("swap_buffers");
        self.backend.swap_buffers();
    }

    /// Events gathered by the last [`poll_events`](Self::poll_events)
    pub fn events(&self) -> &[WindowEvent] {
        &self.events
    }

    /// Drawable size in pixels, updated on resize
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resize the window
    pub fn set_size(&mut self, width: u32, height: u32) {
        trace!("set_size({width}x{height})");
        self.backend.set_size(width, height);
        self.width = width;
        self.height = height;
    }

    /// Screen position of the window's top-left corner
    pub fn position(&self) -> (i32, i32) {
        let bounds = self.backend.bounds();
        (bounds.x, bounds.y)
    }

    /// Move the window
    pub fn set_position(&mut self, x: i32, y: i32) {
        trace!("set_position({x}, {y})");
        self.backend.set_position(x, y);
    }

    /// Center the window on the monitor it mostly covers
    ///
    /// Returns `false` if no monitor could be found to center on.
    pub fn center(&mut self) -> bool {
        let bounds = self.backend.bounds();
        let monitors = self.backend.monitors();
        let primary = self.backend.primary_monitor();

        match placement::centered_position(bounds, &monitors, primary) {
            Some((x, y)) => {
                debug!("Centering window at ({x}, {y})");
                self.backend.set_position(x, y);
                true
            }
            None => false,
        }
    }

    /// Mouse position tracked from cursor events
    pub const fn mouse_position(&self) -> (f64, f64) {
        self.input.mouse_position()
    }

    /// Move the cursor and the tracked mouse position
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        trace!("set_mouse_position({x}, {y})");
        self.backend.set_cursor_position(x, y);
        self.input.set_mouse_position(x, y);
    }

    /// Mouse movement since the last poll
    pub const fn mouse_delta(&self) -> (f64, f64) {
        self.input.mouse_delta()
    }

    /// Scroll offset reported since the last poll
    pub const fn mouse_scroll(&self) -> (f64, f64) {
        self.input.mouse_scroll()
    }

    /// Cursor position queried from the platform right now
    ///
    /// More expensive than [`mouse_position`](Self::mouse_position), which
    /// is updated from events.
    pub fn cursor_position(&self) -> (f64, f64) {
        self.backend.cursor_position()
    }

    /// Same as [`set_mouse_position`](Self::set_mouse_position)
    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.set_mouse_position(x, y);
    }

    /// Change how the cursor behaves over the window
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        debug!("Cursor mode: {mode:?}");
        self.backend.set_cursor_mode(mode);
    }

    /// Whether the window has input focus
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Input state for the current frame
    pub const fn input(&self) -> &InputState {
        &self.input
    }

    /// Whether `key` went down this frame
    pub fn key_pressed(&self, key: Key) -> bool {
        self.input.key_pressed(key)
    }

    /// Whether `key` went up this frame
    pub fn key_released(&self, key: Key) -> bool {
        self.input.key_released(key)
    }

    /// Whether `key` is held
    pub fn key_down(&self, key: Key) -> bool {
        self.input.key_down(key)
    }

    /// Whether `button` went down this frame
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.input.mouse_pressed(button)
    }

    /// Whether `button` went up this frame
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.input.mouse_released(button)
    }

    /// Whether `button` is held
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.input.mouse_down(button)
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        trace!("Destroying window");
    }
}

/// Reject parameters the platform would fail on
pub(crate) fn validate_parameters(width: u32, height: u32, title: &str) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(EogllError::InvalidWindowParameters(format!(
            "window size must be non-zero, got {width}x{height}"
        )));
    }
    if title.contains('\0') {
        return Err(EogllError::InvalidWindowParameters(
            "title must not contain NUL bytes".to_string(),
        ));
    }
    Ok(())
}
