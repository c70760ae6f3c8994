//! Browser binding tests
//!
//! Run with `wasm-pack test --headless --chrome crates/waymark-router`.

#[cfg(target_arch = "wasm32")]
mod wasm_binding_tests {
	use std::cell::RefCell;
	use std::rc::Rc;
	use waymark_router::web::{EventListener, WebClickEvent, WebNode, WindowLocation, install};
	use waymark_router::{
		BoxError, ClickOutcome, DomNode, LocationProvider, SpaRouter, SyncOutcome, ViewFactory,
		ViewName,
	};
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;
	use web_sys::{
		Document, Element, Event, MouseEvent, MouseEventInit, ShadowRootInit, ShadowRootMode,
	};

	wasm_bindgen_test_configure!(run_in_browser);

	type Loader = fn(ViewName) -> futures::future::Ready<Result<ViewFactory<String>, BoxError>>;

	fn echo_loader(name: ViewName) -> futures::future::Ready<Result<ViewFactory<String>, BoxError>> {
		futures::future::ready(Ok(ViewFactory::new(move || name.to_string())))
	}

	fn document() -> Document {
		web_sys::window().unwrap().document().unwrap()
	}

	fn anchor(href: &str) -> Element {
		let anchor = document().create_element("a").unwrap();
		anchor.set_attribute("href", href).unwrap();
		anchor
	}

	fn click() -> MouseEvent {
		let init = MouseEventInit::new();
		init.set_bubbles(true);
		init.set_cancelable(true);
		init.set_composed(true);
		init.set_button(0);
		MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
	}

	fn pathname() -> String {
		web_sys::window().unwrap().location().pathname().unwrap()
	}

	/// Clicks `target` with a window listener forwarding to `router`.
	fn dispatch_click(
		router: &Rc<SpaRouter<WindowLocation, Loader, fn(String)>>,
		target: &Element,
	) -> (bool, Option<ClickOutcome>) {
		let seen = Rc::new(RefCell::new(None));
		let window = web_sys::window().unwrap();
		let _listener = {
			let router = Rc::clone(router);
			let seen = Rc::clone(&seen);
			EventListener::new(window.as_ref(), "click", move |event: Event| {
				let event = WebClickEvent::new(event.dyn_into::<MouseEvent>().unwrap());
				*seen.borrow_mut() = Some(router.handle_click(&event).unwrap());
			})
			.unwrap()
		};
		let not_cancelled = target.dispatch_event(&click()).unwrap();
		let outcome = seen.borrow_mut().take();
		(not_cancelled, outcome)
	}

	fn router() -> Rc<SpaRouter<WindowLocation, Loader, fn(String)>> {
		let paths = ["/".to_string(), "/about".to_string(), pathname()];
		Rc::new(
			SpaRouter::with_paths(
				paths,
				WindowLocation::new(),
				echo_loader as Loader,
				(|_view: String| {}) as fn(String),
			)
			.unwrap(),
		)
	}

	fn restore(path: &str) {
		WindowLocation::new().push_url(path).unwrap();
	}

	#[wasm_bindgen_test]
	fn test_window_location_push_updates_address_bar() {
		let original = pathname();
		let location = WindowLocation::new();

		location.push_url("/about?tab=1#team").unwrap();

		assert!(location.href().unwrap().ends_with("/about?tab=1#team"));
		assert_eq!(pathname(), "/about");
		restore(&original);
	}

	#[wasm_bindgen_test]
	fn test_web_node_finds_host_of_shadow_content() {
		let host = document().create_element("div").unwrap();
		document().body().unwrap().append_child(&host).unwrap();
		let shadow = host
			.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
			.unwrap();
		let inner = document().create_element("span").unwrap();
		shadow.append_child(&inner).unwrap();

		let node = WebNode::new(inner.into());

		assert!(node.is_element());
		assert_eq!(node.shadow_host(), Some(WebNode::new(host.clone().into())));
		host.remove();
	}

	#[wasm_bindgen_test]
	fn test_click_in_shadow_root_is_intercepted() {
		let original = pathname();
		let router = router();
		let host = document().create_element("site-nav").unwrap();
		document().body().unwrap().append_child(&host).unwrap();
		let shadow = host
			.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
			.unwrap();
		let link = anchor("/about");
		let label = document().create_element("span").unwrap();
		link.append_child(&label).unwrap();
		shadow.append_child(&link).unwrap();

		let (not_cancelled, outcome) = dispatch_click(&router, &label);

		assert!(!not_cancelled);
		assert_eq!(
			outcome,
			Some(ClickOutcome::Intercepted(SyncOutcome::RouteChange))
		);
		assert_eq!(pathname(), "/about");
		host.remove();
		restore(&original);
	}

	#[wasm_bindgen_test]
	fn test_click_on_foreign_origin_is_not_cancelled() {
		let original = pathname();
		let router = router();
		// Opaque origin; following it leaves the test page in place.
		let link = anchor("javascript:void(0)");
		document().body().unwrap().append_child(&link).unwrap();

		let (not_cancelled, outcome) = dispatch_click(&router, &link);

		assert!(not_cancelled);
		assert!(matches!(outcome, Some(ClickOutcome::Passthrough(_))));
		assert_eq!(pathname(), original);
		link.remove();
	}

	#[wasm_bindgen_test]
	fn test_install_registers_listeners_until_dropped() {
		let listeners = install(router(), None).unwrap();

		let types = listeners.event_types();

		assert!(types.contains(&"click"));
		assert!(types.contains(&"popstate"));
		drop(listeners);
	}
}
