use super::{js_error_message, window};
use crate::error::RouterError;
use crate::platform::LocationProvider;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// The page's `window.location` and `window.history`.
///
/// Every call goes back to the live browser objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLocation;

impl WindowLocation {
	/// Creates the provider.
	pub fn new() -> Self {
		Self
	}
}

impl LocationProvider for WindowLocation {
	fn href(&self) -> Result<String, RouterError> {
		window()?
			.location()
			.href()
			.map_err(|e| RouterError::Unavailable(format!("location.href: {}", js_error_message(&e))))
	}

	fn push_url(&self, url: &str) -> Result<(), RouterError> {
		let history = window()?
			.history()
			.map_err(|e| RouterError::Unavailable(format!("history: {}", js_error_message(&e))))?;
		history
			.push_state_with_url(&JsValue::NULL, "", Some(url))
			.map_err(|e| RouterError::History(js_error_message(&e)))
	}

	fn scroll_to_origin(&self) {
		let Ok(window) = window() else {
			return;
		};
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_left(0.0);
		options.set_behavior(ScrollBehavior::Auto);
		window.scroll_to_with_scroll_to_options(&options);
	}
}
