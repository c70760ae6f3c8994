//! Browser binding (WASM only).
//!
//! - [`install_error_listeners`]: posts `error` and `unhandledrejection` events
//! - [`failure_hook`]: routes router failures to the reporter
//! - [`WindowNavigator`]: `window.location` for the session refresher

mod listeners;
mod thrown;

pub use listeners::{ErrorListeners, failure_hook, install_error_listeners};
pub use thrown::{base_body_from_js, error_body_from_event};

use crate::error::SessionError;
use crate::session::Navigator;

/// The page's `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl WindowNavigator {
	pub fn new() -> Self {
		Self
	}
}

fn location() -> Result<web_sys::Location, SessionError> {
	web_sys::window()
		.map(|window| window.location())
		.ok_or_else(|| SessionError::Navigation("window unavailable".to_string()))
}

impl Navigator for WindowNavigator {
	fn current_href(&self) -> Result<String, SessionError> {
		location()?
			.href()
			.map_err(|e| SessionError::Navigation(format!("location.href: {e:?}")))
	}

	fn assign(&self, href: &str) -> Result<(), SessionError> {
		location()?
			.set_href(href)
			.map_err(|e| SessionError::Navigation(format!("location.href = {href}: {e:?}")))
	}
}
