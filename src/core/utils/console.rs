//! Browser console logging
//!
//! On wasm32 the macros forward to `web_sys::console`. Imported JS functions
//! cannot be called on native targets, so there the messages are dropped
//! (native builds only exist for tests and benches).
//!
//! Usage:
//! ```rust
//! use shapefield_engine::{console_log, console_warn};
//!
//! let kind = "torus";
//! console_log!("spawned {}", kind);
//! console_warn!("pool for {} is full", kind);
//! ```

/// Log an informational message to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::console::log(&format!($($arg)*))
    };
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::console::warn(&format!($($arg)*))
    };
}

/// Log an error to the browser console.
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::utils::console::error(&format!($($arg)*))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_msg: &str) {}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_are_silent_off_wasm() {
        console_log!("log {}", 1);
        console_warn!("warn {}", 2);
        console_error!("error {}", 3);
    }
}
