use super::{base_body_from_js, error_body_from_event};
use crate::error::ReportError;
use crate::report::{ErrorReporter, ReportTransport};
use std::rc::Rc;
use waymark_router::RouterError;
use waymark_router::web::{EventListener, FailureHook};
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, Event, PromiseRejectionEvent};

/// The `error` and `unhandledrejection` listeners.
///
/// Dropping this value stops reporting.
#[derive(Debug)]
pub struct ErrorListeners {
	listeners: Vec<EventListener>,
}

impl ErrorListeners {
	/// Event types currently handled.
	pub fn event_types(&self) -> Vec<&'static str> {
		self.listeners.iter().map(EventListener::event_type).collect()
	}

	/// Keeps the listeners registered for the lifetime of the page.
	pub fn forget(self) {
		std::mem::forget(self);
	}
}

/// Reports uncaught errors and unhandled rejections of the page.
pub fn install_error_listeners<T>(reporter: Rc<ErrorReporter<T>>) -> Result<ErrorListeners, ReportError>
where
	T: ReportTransport + 'static,
{
	let window = web_sys::window().ok_or_else(|| ReportError::Unavailable("window".to_string()))?;

	let on_error = {
		let reporter = Rc::clone(&reporter);
		EventListener::new(window.as_ref(), "error", move |event: Event| {
			if let Ok(event) = event.dyn_into::<ErrorEvent>() {
				reporter.dispatch_error(&error_body_from_event(&event));
			}
		})?
	};

	let on_rejection = EventListener::new(window.as_ref(), "unhandledrejection", move |event: Event| {
		if let Ok(event) = event.dyn_into::<PromiseRejectionEvent>() {
			reporter.dispatch_rejection(&base_body_from_js(&event.reason()));
		}
	})?;

	Ok(ErrorListeners {
		listeners: vec![on_error, on_rejection],
	})
}

/// Router failure hook that reports the error as an unhandled rejection.
pub fn failure_hook<T>(reporter: Rc<ErrorReporter<T>>) -> FailureHook
where
	T: ReportTransport + 'static,
{
	Rc::new(move |err: RouterError| reporter.report_unhandled(&err))
}
