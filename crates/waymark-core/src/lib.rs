//! Waymark Core - shared utilities for the waymark navigation layer
//!
//! - [`logging`]: `debug_log!`, `info_log!`, `warn_log!`, `error_log!` macros
//!   that target the browser console on WASM and `tracing` natively
//! - [`spawn`]: fire-and-forget task spawning for background work
//! - [`timer`]: `sleep` on the browser event loop or the tokio timer

#![warn(missing_docs)]

pub mod logging;
pub mod spawn;
pub mod timer;

pub use spawn::{MaybeSend, MaybeSync, TaskFuture, spawn_detached, spawn_logged};

#[doc(hidden)]
pub mod __private {
	#[cfg(native)]
	pub use tracing;
	#[cfg(wasm)]
	pub use web_sys;
}
