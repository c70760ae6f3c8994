//! Navigation property-based tests
//!
//! Property tests for view naming and click interception.

#[cfg(not(target_arch = "wasm32"))]
mod property_tests {
	use futures::executor::block_on;
	use proptest::prelude::*;
	use waymark_router::testing::{MockClickEvent, MockDom, MockLocation, RecordingRenderer};
	use waymark_router::{BoxError, Modifiers, SpaRouter, ViewFactory, ViewName};

	type Loader = fn(ViewName) -> futures::future::Ready<Result<ViewFactory<String>, BoxError>>;
	type Router = SpaRouter<MockLocation, Loader, RecordingRenderer>;

	const PATHS: [&str; 4] = ["/", "/about", "/contact-us", "/docs/getting-started"];

	fn echo_loader(name: ViewName) -> futures::future::Ready<Result<ViewFactory<String>, BoxError>> {
		futures::future::ready(Ok(ViewFactory::new(move || name.to_string())))
	}

	fn setup(href: &str) -> (Router, MockLocation, RecordingRenderer) {
		let location = MockLocation::new(href);
		let renderer = RecordingRenderer::new();
		let router = SpaRouter::with_paths(
			PATHS,
			location.clone(),
			echo_loader as Loader,
			renderer.clone(),
		)
		.unwrap();
		(router, location, renderer)
	}

	fn modifiers() -> impl Strategy<Value = Modifiers> {
		(any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
			.prop_filter("at least one modifier", |(m, c, s, a)| *m || *c || *s || *a)
			.prop_map(|(meta, ctrl, shift, alt)| Modifiers {
				meta,
				ctrl,
				shift,
				alt,
			})
	}

	fn app_path() -> impl Strategy<Value = &'static str> {
		prop::sample::select(PATHS.to_vec())
	}

	// ========================================================================
	// View names
	// ========================================================================

	proptest! {
		/// Test: view names keep every segment character and drop separators
		///
		/// Category: Property
		#[test]
		fn prop_view_name_has_no_separators(path in "/?([a-z0-9-]{0,8}/){0,4}[a-z0-9-]{0,8}/?") {
			let name = ViewName::from_path(&path);

			prop_assert!(!name.as_str().contains('/'));
			prop_assert!(!name.as_str().contains('-'));
			prop_assert_eq!(name.as_str().replace('_', ""), path.replace(['/', '-'], ""));
		}

		/// Test: slashes around segments do not change the view name
		///
		/// Category: Property
		#[test]
		fn prop_view_name_ignores_extra_slashes(segments in prop::collection::vec("[a-z]{1,6}", 1..4)) {
			let plain = format!("/{}", segments.join("/"));
			let padded = format!("//{}//", segments.join("//"));

			let name = ViewName::from_path(&plain);
			prop_assert_eq!(&name, &ViewName::from_path(&padded));
			prop_assert_eq!(name.as_str(), segments.join("_"));
		}
	}

	// ========================================================================
	// Click interception
	// ========================================================================

	proptest! {
		/// Test: modifier clicks are never intercepted
		///
		/// Category: Property
		#[test]
		fn prop_modifier_click_is_never_intercepted(mods in modifiers(), path in app_path()) {
			let (router, location, renderer) = setup("https://app.example/");
			let dom = MockDom::new();
			let anchor = dom.element("a").attr("href", path).build();
			dom.body().append(&anchor);
			let event = MockClickEvent::on(&dom, &anchor).modifiers(mods);

			let outcome = router.handle_click(&event).unwrap();

			prop_assert!(!outcome.is_intercepted());
			prop_assert_eq!(event.prevent_default_calls(), 0);
			prop_assert!(location.pushed().is_empty());
			prop_assert!(renderer.rendered().is_empty());
		}

		/// Test: non-primary buttons are never intercepted
		///
		/// Category: Property
		#[test]
		fn prop_non_primary_button_is_never_intercepted(button in 1i16..5, path in app_path()) {
			let (router, location, _renderer) = setup("https://app.example/");
			let dom = MockDom::new();
			let anchor = dom.element("a").attr("href", path).build();
			dom.body().append(&anchor);
			let event = MockClickEvent::on(&dom, &anchor).button(button);

			let outcome = router.handle_click(&event).unwrap();

			prop_assert!(!outcome.is_intercepted());
			prop_assert!(!event.is_default_prevented());
			prop_assert!(location.pushed().is_empty());
		}

		/// Test: links to another origin are never intercepted
		///
		/// Category: Property
		#[test]
		fn prop_cross_origin_is_never_intercepted(
			host in "[a-z]{1,10}\\.(com|org|net)",
			path in app_path(),
		) {
			let (router, location, _renderer) = setup("https://app.example/");
			let dom = MockDom::new();
			let anchor = dom
				.element("a")
				.attr("href", format!("https://{host}{path}"))
				.build();
			dom.body().append(&anchor);
			let event = MockClickEvent::on(&dom, &anchor);

			let outcome = router.handle_click(&event).unwrap();

			prop_assert!(!outcome.is_intercepted());
			prop_assert!(!event.is_default_prevented());
			prop_assert!(location.pushed().is_empty());
		}

		/// Test: an in-app click away from the current page pushes once and renders once
		///
		/// Category: Property
		#[test]
		fn prop_in_app_click_pushes_once(
			from in app_path(),
			to in app_path(),
			query in prop::option::of("[a-z]{1,5}=[0-9]{1,3}"),
		) {
			let destination = match &query {
				Some(query) => format!("{to}?{query}"),
				None => to.to_string(),
			};
			prop_assume!(destination != from);

			let (router, location, renderer) = setup(&format!("https://app.example{from}"));
			let dom = MockDom::new();
			let anchor = dom.element("a").attr("href", destination.as_str()).build();
			dom.body().append(&anchor);
			let event = MockClickEvent::on(&dom, &anchor);

			let (outcome, rendered) = block_on(router.navigate_click(&event)).unwrap();

			prop_assert!(outcome.needs_render());
			prop_assert_eq!(event.prevent_default_calls(), 1);
			prop_assert_eq!(location.pushed(), vec![destination]);
			prop_assert_eq!(location.scroll_resets(), 1);
			prop_assert_eq!(rendered, Some(router.registry().view_name(to)));
			prop_assert_eq!(renderer.rendered().len(), 1);
		}
	}
}
