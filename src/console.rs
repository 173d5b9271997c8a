//! Browser console logging
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` the calls compile to
//! nothing, so component logic can be exercised by native `cargo test`.

/// Log an informational line: `console_log!("[Tooltip] bound {}", n)`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::console::log(&format!($($arg)*))
    };
}

/// Log a warning line
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::console::warn(&format!($($arg)*))
    };
}

/// Log an error line
#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::console::error(&format!($($arg)*))
    };
}

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_message: &str) {}
