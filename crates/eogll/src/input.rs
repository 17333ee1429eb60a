//! Per-frame keyboard and mouse state
//!
//! Keys and mouse buttons use GLFW's codes directly. Each frame (one call to
//! [`Window::poll_events`](crate::Window::poll_events)) starts by clearing
//! the edge flags, then events are folded in as they arrive.

use glfw::WindowEvent;

pub use glfw::{Action, Key, Modifiers, MouseButton};

/// Highest GLFW key code (`GLFW_KEY_MENU`)
pub const KEY_LAST: usize = 348;

/// Highest GLFW mouse button index (`GLFW_MOUSE_BUTTON_8`)
pub const MOUSE_BUTTON_LAST: usize = 7;

const KEY_COUNT: usize = KEY_LAST + 1;
const MOUSE_BUTTON_COUNT: usize = MOUSE_BUTTON_LAST + 1;

/// How the cursor behaves inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorMode {
    /// Visible and free to leave the window
    #[default]
    Normal,
    /// Hidden while over the window
    Hidden,
    /// Hidden and locked to the window, for camera-style controls
    Disabled,
}

impl From<CursorMode> for glfw::CursorMode {
    fn from(mode: CursorMode) -> Self {
        match mode {
            CursorMode::Normal => Self::Normal,
            CursorMode::Hidden => Self::Hidden,
            CursorMode::Disabled => Self::Disabled,
        }
    }
}

/// Pressed/released/down flags for a set of buttons
#[derive(Debug, Clone)]
struct ButtonStates<const N: usize> {
    pressed: [bool; N],
    released: [bool; N],
    down: [bool; N],
}

impl<const N: usize> ButtonStates<N> {
    const fn new() -> Self {
        Self {
            pressed: [false; N],
            released: [false; N],
            down: [false; N],
        }
    }

    fn clear_edges(&mut self) {
        self.pressed = [false; N];
        self.released = [false; N];
    }

    fn apply(&mut self, index: usize, action: Action) {
        match action {
            Action::Press => {
                self.pressed[index] = true;
                self.down[index] = true;
            }
            Action::Release => {
                self.released[index] = true;
                self.down[index] = false;
            }
            Action::Repeat => {}
        }
    }
}

/// Keyboard and mouse state accumulated over one frame
#[derive(Debug, Clone)]
pub struct InputState {
    keys: ButtonStates<KEY_COUNT>,
    buttons: ButtonStates<MOUSE_BUTTON_COUNT>,
    mouse_position: (f64, f64),
    mouse_delta: (f64, f64),
    mouse_scroll: (f64, f64),
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create an empty input state with the mouse at the origin
    pub const fn new() -> Self {
        Self {
            keys: ButtonStates::new(),
            buttons: ButtonStates::new(),
            mouse_position: (0.0, 0.0),
            mouse_delta: (0.0, 0.0),
            mouse_scroll: (0.0, 0.0),
        }
    }

    /// Reset per-frame values
    ///
    /// Down flags and the mouse position carry over between frames.
    pub fn begin_frame(&mut self) {
        self.keys.clear_edges();
        self.buttons.clear_edges();
        self.mouse_delta = (0.0, 0.0);
        self.mouse_scroll = (0.0, 0.0);
    }

    /// Fold a window event into the state
    ///
    /// Returns `true` if the event was an input event.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match *event {
            WindowEvent::Key(key, _, action, _) => {
                if let Some(index) = key_index(key) {
                    self.keys.apply(index, action);
                }
                true
            }
            WindowEvent::MouseButton(button, action, _) => {
                if let Some(index) = button_index(button) {
                    self.buttons.apply(index, action);
                }
                true
            }
            WindowEvent::CursorPos(x, y) => {
                // several moves can land in one frame; keep the total
                self.mouse_delta.0 += x - self.mouse_position.0;
                self.mouse_delta.1 += y - self.mouse_position.1;
                self.mouse_position = (x, y);
                true
            }
            WindowEvent::Scroll(x, y) => {
                self.mouse_scroll = (x, y);
                true
            }
            _ => false,
        }
    }

    /// Move the tracked mouse position without producing a delta
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        self.mouse_position = (x, y);
    }

    /// Whether `key` went down this frame
    pub fn key_pressed(&self, key: Key) -> bool {
        key_index(key).is_some_and(|i| self.keys.pressed[i])
    }

    /// Whether `key` went up this frame
    pub fn key_released(&self, key: Key) -> bool {
        key_index(key).is_some_and(|i| self.keys.released[i])
    }

    /// Whether `key` is currently held
    pub fn key_down(&self, key: Key) -> bool {
        key_index(key).is_some_and(|i| self.keys.down[i])
    }

    /// Whether `button` went down this frame
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|i| self.buttons.pressed[i])
    }

    /// Whether `button` went up this frame
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|i| self.buttons.released[i])
    }

    /// Whether `button` is currently held
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|i| self.buttons.down[i])
    }

    /// Last known mouse position in window coordinates
    pub const fn mouse_position(&self) -> (f64, f64) {
        self.mouse_position
    }

    /// Total mouse movement this frame
    pub const fn mouse_delta(&self) -> (f64, f64) {
        self.mouse_delta
    }

    /// Scroll offset reported this frame
    pub const fn mouse_scroll(&self) -> (f64, f64) {
        self.mouse_scroll
    }
}

fn key_index(key: Key) -> Option<usize> {
    usize::try_from(key as i32).ok().filter(|&i| i < KEY_COUNT)
}

fn button_index(button: MouseButton) -> Option<usize> {
    usize::try_from(button as i32)
        .ok()
        .filter(|&i| i < MOUSE_BUTTON_COUNT)
}
