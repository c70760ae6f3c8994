use super::{WebClickEvent, WindowLocation, js_error_message, window};
use crate::error::RouterError;
use crate::router::SpaRouter;
use crate::view::{LoadedView, ViewLoader, ViewRenderer};
use std::rc::Rc;
use waymark_core::{error_log, spawn_detached};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, MouseEvent};

/// Receives errors the router cannot return to anyone, such as a failed
/// view load started from a `popstate` listener.
pub type FailureHook = Rc<dyn Fn(RouterError)>;

type BrowserRouter<L, R> = SpaRouter<WindowLocation, L, R>;

/// A registered DOM event listener, removed on drop.
pub struct EventListener {
	target: EventTarget,
	event_type: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl std::fmt::Debug for EventListener {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventListener")
			.field("event_type", &self.event_type)
			.finish_non_exhaustive()
	}
}

impl EventListener {
	/// Adds `handler` as a listener for `event_type` on `target`.
	pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, RouterError>
	where
		F: FnMut(Event) + 'static,
	{
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target
			.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
			.map_err(|e| {
				RouterError::Unavailable(format!(
					"addEventListener('{event_type}'): {}",
					js_error_message(&e)
				))
			})?;
		Ok(Self {
			target: target.clone(),
			event_type,
			callback,
		})
	}

	/// The event type this listener handles.
	pub fn event_type(&self) -> &'static str {
		self.event_type
	}
}

impl Drop for EventListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
	}
}

/// Listeners installed by [`install`].
///
/// Dropping this value detaches the router from the page.
#[derive(Debug)]
pub struct NavigationListeners {
	listeners: Vec<EventListener>,
}

impl NavigationListeners {
	/// Event types currently handled.
	pub fn event_types(&self) -> Vec<&'static str> {
		self.listeners.iter().map(EventListener::event_type).collect()
	}

	/// Keeps the listeners registered for the lifetime of the page.
	pub fn forget(self) {
		std::mem::forget(self);
	}
}

fn spawn_render<L, R>(router: &Rc<BrowserRouter<L, R>>, on_failure: &FailureHook)
where
	L: ViewLoader + 'static,
	R: ViewRenderer<LoadedView<L>> + 'static,
{
	let router = Rc::clone(router);
	let on_failure = Rc::clone(on_failure);
	spawn_detached(async move {
		if let Err(err) = router.render_current().await {
			on_failure(err);
		}
	});
}

/// Default failure hook: logs to the console.
pub fn log_failure() -> FailureHook {
	Rc::new(|err: RouterError| error_log!("navigation failed: {}", err))
}

/// Wires `router` to the page.
///
/// Registers `click` and `popstate` on `window`. The initial render runs on
/// `DOMContentLoaded`, or right away when the document has already been parsed
/// (the usual case once a WASM module has finished loading).
pub fn install<L, R>(
	router: Rc<BrowserRouter<L, R>>,
	on_failure: Option<FailureHook>,
) -> Result<NavigationListeners, RouterError>
where
	L: ViewLoader + 'static,
	R: ViewRenderer<LoadedView<L>> + 'static,
{
	let on_failure = on_failure.unwrap_or_else(log_failure);
	let window = window()?;
	let target: &EventTarget = window.as_ref();
	let mut listeners = Vec::with_capacity(3);

	let click = {
		let router = Rc::clone(&router);
		let on_failure = Rc::clone(&on_failure);
		EventListener::new(target, "click", move |event: Event| {
			let Ok(event) = event.dyn_into::<MouseEvent>() else {
				return;
			};
			match router.handle_click(&WebClickEvent::new(event)) {
				Ok(outcome) if outcome.needs_render() => spawn_render(&router, &on_failure),
				Ok(_) => {}
				Err(err) => on_failure(err),
			}
		})?
	};
	listeners.push(click);

	let pop_state = {
		let router = Rc::clone(&router);
		let on_failure = Rc::clone(&on_failure);
		EventListener::new(target, "popstate", move |_event: Event| {
			spawn_render(&router, &on_failure);
		})?
	};
	listeners.push(pop_state);

	let still_loading = window
		.document()
		.is_some_and(|document| document.ready_state() == "loading");
	if still_loading {
		let router = Rc::clone(&router);
		let on_failure = Rc::clone(&on_failure);
		let ready = EventListener::new(target, "DOMContentLoaded", move |_event: Event| {
			spawn_render(&router, &on_failure);
		})?;
		listeners.push(ready);
	} else {
		spawn_render(&router, &on_failure);
	}

	Ok(NavigationListeners { listeners })
}
