//! Window creation hints

use serde::{Deserialize, Serialize};

/// Boolean toggles applied when a window is created
///
/// The defaults describe an ordinary desktop window: resizable, decorated,
/// visible and focused, neither floating, maximized nor transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowHints {
    resizable: bool,
    decorated: bool,
    floating: bool,
    maximized: bool,
    visible: bool,
    focused: bool,
    transparent: bool,
}

impl WindowHints {
    /// Create hints from explicit values
    pub const fn new(
        resizable: bool,
        decorated: bool,
        floating: bool,
        maximized: bool,
        visible: bool,
        focused: bool,
        transparent: bool,
    ) -> Self {
        Self {
            resizable,
            decorated,
            floating,
            maximized,
            visible,
            focused,
            transparent,
        }
    }

    /// Whether the user can resize the window
    pub const fn resizable(&self) -> bool {
        self.resizable
    }

    /// Whether the window has a border and title bar
    pub const fn decorated(&self) -> bool {
        self.decorated
    }

    /// Whether the window stays on top of other windows
    pub const fn floating(&self) -> bool {
        self.floating
    }

    /// Whether the window starts maximized
    pub const fn maximized(&self) -> bool {
        self.maximized
    }

    /// Whether the window starts visible
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Whether the window receives input focus when created
    ///
    /// Only the starting state; focus changes later are reported by
    /// [`Window::is_focused`](crate::Window::is_focused).
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Whether the framebuffer is transparent
    pub const fn transparent(&self) -> bool {
        self.transparent
    }

    /// Set resizable
    pub const fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set decorated
    pub const fn with_decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    /// Set floating
    pub const fn with_floating(mut self, floating: bool) -> Self {
        self.floating = floating;
        self
    }

    /// Set maximized
    pub const fn with_maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    /// Set visible
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set focused
    pub const fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set transparent
    pub const fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Hints with every flag set to `value`
    pub const fn all(value: bool) -> Self {
        Self::new(value, value, value, value, value, value, value)
    }

    /// Translate into GLFW window hints
    pub(crate) fn to_glfw(self) -> [glfw::WindowHint; 7] {
        use glfw::WindowHint;
        [
            WindowHint::Resizable(self.resizable),
            WindowHint::Decorated(self.decorated),
            WindowHint::Floating(self.floating),
            WindowHint::Maximized(self.maximized),
            WindowHint::Visible(self.visible),
            WindowHint::Focused(self.focused),
            WindowHint::TransparentFramebuffer(self.transparent),
        ]
    }
}

impl Default for WindowHints {
    fn default() -> Self {
        Self::new(true, true, false, false, true, true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hints() {
        let hints = WindowHints::default();
        assert!(hints.resizable());
        assert!(hints.decorated());
        assert!(!hints.floating());
        assert!(!hints.maximized());
        assert!(hints.visible());
        assert!(hints.focused());
        assert!(!hints.transparent());
    }

    #[test]
    fn test_explicit_hints_round_trip() {
        for value in [true, false] {
            let hints = WindowHints::new(value, value, value, value, value, value, value);
            assert_eq!(hints.resizable(), value);
            assert_eq!(hints.decorated(), value);
            assert_eq!(hints.floating(), value);
            assert_eq!(hints.maximized(), value);
            assert_eq!(hints.visible(), value);
            assert_eq!(hints.focused(), value);
            assert_eq!(hints.transparent(), value);
            assert_eq!(hints, WindowHints::all(value));
        }
    }

    #[test]
    fn test_mixed_hints_keep_argument_order() {
        let hints = WindowHints::new(false, true, false, true, false, true, false);
        assert!(!hints.resizable());
        assert!(hints.decorated());
        assert!(!hints.floating());
        assert!(hints.maximized());
        assert!(!hints.visible());
        assert!(hints.focused());
        assert!(!hints.transparent());
    }

    #[test]
    fn test_builder_changes_single_flag() {
        let hints = WindowHints::default()
            .with_decorated(false)
            .with_floating(true);
        assert!(!hints.decorated());
        assert!(hints.floating());
        assert!(hints.resizable());
        assert!(!hints.transparent());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let hints: WindowHints = toml::from_str("transparent = true\nresizable = false").unwrap();
        assert!(hints.transparent());
        assert!(!hints.resizable());
        assert!(hints.decorated());
        assert!(hints.visible());
        assert!(!hints.maximized());
    }

    #[test]
    fn test_glfw_hint_translation() {
        let translated = WindowHints::all(true).with_visible(false).to_glfw();
        assert!(translated
            .iter()
            .any(|hint| matches!(hint, glfw::WindowHint::Visible(false))));
        assert!(translated
            .iter()
            .any(|hint| matches!(hint, glfw::WindowHint::TransparentFramebuffer(true))));
    }
}
