//! Logging abstraction layer for waymark
//!
//! These macros work the same way on WASM and native targets. In the browser they
//! write to the developer console; natively they forward to `tracing`, so hosts
//! that run the router logic server-side or in tests get structured events.
//!
//! ## Macro Overview
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-navigation` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | Required | None | `console.info` | `tracing::info!` |
//! | `warn_log!` | Required | None | `console.warn` | `tracing::warn!` |
//! | `error_log!` | Not required | None | `console.error` | `tracing::error!` |
//!
//! `error_log!` stays enabled in release builds: it is the only place where
//! failures of detached background work (error reports, session refreshes)
//! become visible.
//!
//! ## Example
//!
//! ```ignore
//! use waymark_core::{debug_log, error_log, info_log};
//!
//! debug_log!("passthrough: {:?}", reason);
//! info_log!("rendering view {}", name);
//! error_log!("failed to report error: {}", err);
//! ```

/// Logs a debug message (requires `debug-navigation` feature + `debug_assertions`)
///
/// Used for the per-click decision trail. Compiles to a no-op when the
/// conditions are not met.
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-navigation", wasm))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-navigation` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-navigation", native))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!("{}", format!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-navigation")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
///
/// # Example
///
/// ```ignore
/// info_log!("rendering view {}", name);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, wasm))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, native))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!("{}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, wasm))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, native))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!("{}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message
///
/// # Example
///
/// ```ignore
/// error_log!("session refresh failed: {}", error);
/// ```
#[macro_export]
#[cfg(wasm)]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(native)]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!("{}", format!($($arg)*));
	}};
}
