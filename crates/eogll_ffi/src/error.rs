//! Thread-local last error for the C interface
//!
//! Every exported function clears the slot on entry. Failures store a message
//! and return a sentinel (null or a failure code).

use std::cell::RefCell;
use std::ffi::{c_char, CString};
use std::fmt::Display;
use std::ptr;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

pub(crate) fn clear_error() {
    LAST_ERROR.with(|slot| slot.borrow_mut().take());
}

pub(crate) fn set_error(message: impl Display) {
    let message = message.to_string().replace('\0', "\\0");
    log::error!("{message}");
    // NULs were escaped above
    let message = CString::new(message).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message));
}

/// Run `f`, recording its error if it fails
pub(crate) fn check<T, E: Display>(f: impl FnOnce() -> Result<T, E>) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(e) => {
            set_error(e);
            None
        }
    }
}

pub(crate) fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|slot| slot.borrow().as_ref().map_or(ptr::null(), |msg| msg.as_ptr()))
}

#[cfg(test)]
pub(crate) fn last_error_message() -> Option<String> {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|msg| msg.to_string_lossy().into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_records_failure() {
        clear_error();
        let result: Option<u32> = check(|| Err::<u32, _>("boom"));
        assert!(result.is_none());
        assert_eq!(last_error_message().as_deref(), Some("boom"));
        assert!(!last_error_ptr().is_null());

        clear_error();
        assert!(last_error_ptr().is_null());
    }

    #[test]
    fn test_check_passes_success_through() {
        clear_error();
        assert_eq!(check(|| Ok::<_, String>(7)), Some(7));
        assert!(last_error_message().is_none());
    }

    #[test]
    fn test_interior_nul_is_escaped() {
        set_error("a\0b");
        assert_eq!(last_error_message().as_deref(), Some("a\\0b"));
    }
}
