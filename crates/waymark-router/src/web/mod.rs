//! Browser binding (WASM only).
//!
//! Implements the platform traits over `web-sys` and installs the `click`,
//! `popstate` and `DOMContentLoaded` listeners that drive a [`SpaRouter`].
//!
//! [`SpaRouter`]: crate::router::SpaRouter

mod dom;
mod listeners;
mod location;

pub use dom::{WebAnchor, WebClickEvent, WebNode};
pub use listeners::{EventListener, FailureHook, NavigationListeners, install, log_failure};
pub use location::WindowLocation;

use crate::error::RouterError;
use wasm_bindgen::JsValue;

/// Formats a thrown JS value for a [`RouterError`].
pub(crate) fn js_error_message(value: &JsValue) -> String {
	value
		.as_string()
		.or_else(|| {
			js_sys::Reflect::get(value, &JsValue::from_str("message"))
				.ok()
				.and_then(|message| message.as_string())
		})
		.unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn window() -> Result<web_sys::Window, RouterError> {
	web_sys::window().ok_or_else(|| RouterError::Unavailable("window".to_string()))
}
