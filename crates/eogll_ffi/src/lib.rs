//! C interface to the EOGLL window layer
//!
//! Windows and window hints are handed out as opaque pointers. Each `create`
//! call must be paired with the matching `destroy` call. All functions must be
//! called from the thread that called `eogll_init` (normally the main thread).
//!
//! Null handles are tolerated everywhere: queries return `false` and
//! mutators do nothing.

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;
use std::sync::OnceLock;

use eogll::{Eogll, EogllError, Window, WindowHints};

mod error;

/// Returned by `eogll_init` on success
pub const EOGLL_SUCCESS: c_int = 0;
/// Returned by `eogll_init` on failure
pub const EOGLL_FAILURE: c_int = 1;

/// Opaque window hints handle
pub struct EogllWindowHints(WindowHints);

/// Opaque window handle
pub struct EogllWindow(Window);

thread_local! {
    static CONTEXT: RefCell<Option<Eogll>> = const { RefCell::new(None) };
}

fn with_context<T>(f: impl FnOnce(&mut Eogll) -> Result<T, EogllError>) -> Result<T, EogllError> {
    CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(Eogll::init()?);
        }
        match slot.as_mut() {
            Some(context) => f(context),
            None => Err(EogllError::Initialization("context unavailable".to_string())),
        }
    })
}

/// Initialize the library.
///
/// Returns `EOGLL_SUCCESS`, also when already initialized.
#[no_mangle]
pub extern "C" fn eogll_init() -> c_int {
    error::clear_error();
    error::check(|| with_context(|_| Ok(())))
        .map_or(EOGLL_FAILURE, |()| EOGLL_SUCCESS)
}

/// Release the library context.
///
/// Windows that are still alive keep GLFW running until they are destroyed.
#[no_mangle]
pub extern "C" fn eogll_terminate() {
    error::clear_error();
    if CONTEXT.with(|slot| slot.borrow_mut().take()).is_some() {
        log::info!("Bye!");
    }
}

/// Version string, e.g. `"EOGLL 0.2.5"`.
///
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn eogll_get_version_string() -> *const c_char {
    static VERSION: OnceLock<CString> = OnceLock::new();
    VERSION
        .get_or_init(|| CString::new(Eogll::version_string()).unwrap_or_default())
        .as_ptr()
}

/// Message of the last failed call on this thread, or null.
///
/// Valid until the next call into this library on the same thread.
#[no_mangle]
pub extern "C" fn eogll_last_error() -> *const c_char {
    error::last_error_ptr()
}

/// Create window hints from explicit flags.
#[no_mangle]
pub extern "C" fn eogll_window_hints_create(
    resizable: bool,
    decorated: bool,
    floating: bool,
    maximized: bool,
    visible: bool,
    focused: bool,
    transparent: bool,
) -> *mut EogllWindowHints {
    error::clear_error();
    let hints = WindowHints::new(
        resizable,
        decorated,
        floating,
        maximized,
        visible,
        focused,
        transparent,
    );
    Box::into_raw(Box::new(EogllWindowHints(hints)))
}

/// Create window hints with the library defaults.
#[no_mangle]
pub extern "C" fn eogll_window_hints_create_default() -> *mut EogllWindowHints {
    error::clear_error();
    Box::into_raw(Box::new(EogllWindowHints(WindowHints::default())))
}

/// Destroy window hints.
///
/// # Safety
/// `hints` must be null or a pointer returned by one of the
/// `eogll_window_hints_create*` functions that was not destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_destroy(hints: *mut EogllWindowHints) {
    error::clear_error();
    if !hints.is_null() {
        drop(Box::from_raw(hints));
    }
}

unsafe fn read_hint(hints: *const EogllWindowHints, flag: fn(&WindowHints) -> bool) -> bool {
    error::clear_error();
    hints.as_ref().is_some_and(|h| flag(&h.0))
}

/// # Safety
/// `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_resizable(hints: *const EogllWindowHints) -> bool {
    read_hint(hints, WindowHints::resizable)
}

/// # Safety
/// `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_decorated(hints: *const EogllWindowHints) -> bool {
    read_hint(hints, WindowHints::decorated)
}

/// # Safety
/// `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_floating(hints: *const EogllWindowHints) -> bool {
    read_hint(hints, WindowHints::floating)
}

/// # Safety
/// `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_maximized(hints: *const EogllWindowHints) -> bool {
    read_hint(hints, WindowHints::maximized)
}

/// # Safety
/// `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_visible(hints: *const EogllWindowHints) -> bool {
    read_hint(hints, WindowHints::visible)
}

/// # Safety
/// `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_focused(hints: *const EogllWindowHints) -> bool {
    read_hint(hints, WindowHints::focused)
}

/// # Safety
/// `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_hints_transparent(hints: *const EogllWindowHints) -> bool {
    read_hint(hints, WindowHints::transparent)
}

/// Create a window, initializing the library first if needed.
///
/// Null `hints` means the default hints. Returns null on failure; see
/// `eogll_last_error`.
///
/// # Safety
/// - `title` must be null or a valid NUL-terminated string.
/// - `hints` must be null or a live hints handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_create(
    width: u32,
    height: u32,
    title: *const c_char,
    hints: *const EogllWindowHints,
) -> *mut EogllWindow {
    error::clear_error();
    if title.is_null() {
        error::set_error("window title is null");
        return ptr::null_mut();
    }
    let Some(title) = error::check(|| CStr::from_ptr(title).to_str()) else {
        return ptr::null_mut();
    };
    let hints = hints.as_ref().map_or_else(WindowHints::default, |h| h.0);

    error::check(|| with_context(|context| context.create_window(width, height, title, &hints)))
        .map_or(ptr::null_mut(), |window| Box::into_raw(Box::new(EogllWindow(window))))
}

/// Destroy a window.
///
/// # Safety
/// `window` must be null or a pointer returned by `eogll_window_create` that
/// was not destroyed yet.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_destroy(window: *mut EogllWindow) {
    error::clear_error();
    if !window.is_null() {
        drop(Box::from_raw(window));
    }
}

/// Whether the window should close.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_should_close(window: *const EogllWindow) -> bool {
    error::clear_error();
    window.as_ref().is_some_and(|w| w.0.should_close())
}

/// Request or cancel closing.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_set_should_close(window: *mut EogllWindow, should_close: bool) {
    error::clear_error();
    if let Some(window) = window.as_mut() {
        window.0.set_should_close(should_close);
    }
}

/// Process pending events for the window.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_poll_events(window: *mut EogllWindow) {
    error::clear_error();
    if let Some(window) = window.as_mut() {
        window.0.poll_events();
    }
}

/// Present the window's back buffer.
///
/// # Safety
/// `window` must be null or a live window handle.
#[no_mangle]
pub unsafe extern "C" fn eogll_window_swap_buffers(window: *mut EogllWindow) {
    error::clear_error();
    if let Some(window) = window.as_mut() {
        window.0.swap_buffers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn flags(hints: *const EogllWindowHints) -> [bool; 7] {
        [
            eogll_window_hints_resizable(hints),
            eogll_window_hints_decorated(hints),
            eogll_window_hints_floating(hints),
            eogll_window_hints_maximized(hints),
            eogll_window_hints_visible(hints),
            eogll_window_hints_focused(hints),
            eogll_window_hints_transparent(hints),
        ]
    }

    #[test]
    fn test_default_hints_handle() {
        let hints = eogll_window_hints_create_default();
        assert!(!hints.is_null());
        unsafe {
            assert_eq!(flags(hints), [true, true, false, false, true, true, false]);
            eogll_window_hints_destroy(hints);
        }
    }

    #[test]
    fn test_explicit_hints_handle_round_trip() {
        for value in [true, false] {
            let hints = eogll_window_hints_create(value, value, value, value, value, value, value);
            unsafe {
                assert_eq!(flags(hints), [value; 7]);
                eogll_window_hints_destroy(hints);
            }
        }
    }

    #[test]
    fn test_null_handles_are_tolerated() {
        unsafe {
            assert_eq!(flags(ptr::null()), [false; 7]);
            eogll_window_hints_destroy(ptr::null_mut());

            assert!(!eogll_window_should_close(ptr::null()));
            eogll_window_set_should_close(ptr::null_mut(), true);
            eogll_window_poll_events(ptr::null_mut());
            eogll_window_swap_buffers(ptr::null_mut());
            eogll_window_destroy(ptr::null_mut());
        }
    }

    #[test]
    fn test_version_string() {
        let version = unsafe { CStr::from_ptr(eogll_get_version_string()) };
        assert_eq!(version.to_str().unwrap(), Eogll::version_string());
        // same static string on every call
        assert_eq!(eogll_get_version_string(), eogll_get_version_string());
    }

    #[test]
    fn test_window_create_rejects_null_title() {
        let window = unsafe { eogll_window_create(800, 600, ptr::null(), ptr::null()) };
        assert!(window.is_null());

        let message = unsafe { CStr::from_ptr(eogll_last_error()) };
        assert_eq!(message.to_str().unwrap(), "window title is null");
    }

    #[test]
    fn test_window_create_rejects_invalid_utf8_title() {
        let title = b"\xff\xfe\0";
        let window = unsafe { eogll_window_create(800, 600, title.as_ptr().cast(), ptr::null()) };
        assert!(window.is_null());
        assert!(!eogll_last_error().is_null());
    }

    #[test]
    fn test_successful_call_clears_last_error() {
        unsafe { eogll_window_create(800, 600, ptr::null(), ptr::null()) };
        assert!(!eogll_last_error().is_null());

        let hints = eogll_window_hints_create_default();
        assert!(eogll_last_error().is_null());
        unsafe { eogll_window_hints_destroy(hints) };
    }
}
