//! Crash containment for keypad actions.
//!
//! A panic inside an action handler must never take the window down or
//! surface as a dialog. It is logged and the frame carries on with whatever
//! state the handler had already written.

use std::panic::{self, AssertUnwindSafe};

/// Run `f`, catching any panic. Returns `Some` on success, `None` if the
/// closure panicked. `context` names the action in the log line.
pub fn guard<T>(context: &str, f: impl FnOnce() -> T) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(val) => Some(val),
        Err(payload) => {
            tracing::error!("caught panic in {}: {}", context, panic_message(payload.as_ref()));
            None
        }
    }
}

/// Like [`guard`], but substitutes `fallback` for a panicked result.
pub fn catch_or<T>(fallback: T, context: &str, f: impl FnOnce() -> T) -> T {
    guard(context, f).unwrap_or(fallback)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
