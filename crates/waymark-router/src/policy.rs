//! Navigation policy.
//!
//! Decides whether a click is handled by the router or left to the browser.
//! Checks run in a fixed order and the first one that fails cedes the click.

use crate::location::CurrentLocation;
use crate::platform::{AnchorElement, ClickEvent, PRIMARY_BUTTON};
use crate::registry::PathRegistry;
use std::fmt;
use url::Url;

/// Why a click was left to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassthroughReason {
	/// Another listener already prevented the default action.
	DefaultPrevented,
	/// Not a primary button activation.
	NonPrimaryButton,
	/// A modifier key was held (new tab, new window, ...).
	ModifierHeld,
	/// The click did not hit a link.
	NoAnchor,
	/// The link opens in another browsing context.
	ForeignTarget,
	/// The link downloads a file.
	Download,
	/// The link's destination is not a valid URL.
	UnresolvableHref,
	/// The link points to another origin.
	CrossOrigin,
	/// The link's pathname is not an in-app route.
	UnknownPath,
}

impl fmt::Display for PassthroughReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = match self {
			Self::DefaultPrevented => "default action already prevented",
			Self::NonPrimaryButton => "not a primary button click",
			Self::ModifierHeld => "modifier key held",
			Self::NoAnchor => "no link under the pointer",
			Self::ForeignTarget => "link opens in another browsing context",
			Self::Download => "link triggers a download",
			Self::UnresolvableHref => "link destination is not a valid URL",
			Self::CrossOrigin => "link points to another origin",
			Self::UnknownPath => "link path is not an in-app route",
		};
		f.write_str(text)
	}
}

/// Outcome of the navigation policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
	/// The router handles the click; carries the resolved destination.
	Intercept(Url),
	/// The browser handles the click.
	Passthrough(PassthroughReason),
}

impl NavigationDecision {
	/// Returns true for [`NavigationDecision::Intercept`].
	pub fn is_intercept(&self) -> bool {
		matches!(self, Self::Intercept(_))
	}
}

/// Evaluates clicks against a [`PathRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct NavigationPolicy<'a> {
	registry: &'a PathRegistry,
}

impl<'a> NavigationPolicy<'a> {
	/// Creates a policy for `registry`.
	pub fn new(registry: &'a PathRegistry) -> Self {
		Self { registry }
	}

	/// Checks that only depend on the event itself.
	///
	/// Returns the reason to pass the click through, or `None` if the event
	/// is a plain primary-button activation.
	pub fn screen_event<E: ClickEvent>(event: &E) -> Option<PassthroughReason> {
		if event.default_prevented() {
			return Some(PassthroughReason::DefaultPrevented);
		}
		if event.button() != PRIMARY_BUTTON {
			return Some(PassthroughReason::NonPrimaryButton);
		}
		if event.modifiers().any() {
			return Some(PassthroughReason::ModifierHeld);
		}
		None
	}

	/// Checks on the resolved anchor and its destination.
	pub fn evaluate_anchor<A: AnchorElement>(
		&self,
		anchor: Option<&A>,
		current: &CurrentLocation,
	) -> NavigationDecision {
		let Some(anchor) = anchor else {
			return NavigationDecision::Passthrough(PassthroughReason::NoAnchor);
		};

		let target = anchor.target();
		if !target.is_empty() && !target.eq_ignore_ascii_case("_self") {
			return NavigationDecision::Passthrough(PassthroughReason::ForeignTarget);
		}

		if anchor.has_download() {
			return NavigationDecision::Passthrough(PassthroughReason::Download);
		}

		let Some(destination) = current.resolve(&anchor.href()) else {
			return NavigationDecision::Passthrough(PassthroughReason::UnresolvableHref);
		};

		if destination.origin().ascii_serialization() != current.origin() {
			return NavigationDecision::Passthrough(PassthroughReason::CrossOrigin);
		}

		if !self.registry.contains(destination.path()) {
			return NavigationDecision::Passthrough(PassthroughReason::UnknownPath);
		}

		NavigationDecision::Intercept(destination)
	}

	/// Runs every check in order.
	///
	/// `resolve` is only called once the event itself qualifies, so the
	/// composed path is not walked for modifier or secondary-button clicks.
	pub fn decide<E, A, F>(
		&self,
		event: &E,
		resolve: F,
		current: &CurrentLocation,
	) -> NavigationDecision
	where
		E: ClickEvent,
		A: AnchorElement,
		F: FnOnce() -> Option<A>,
	{
		if let Some(reason) = Self::screen_event(event) {
			return NavigationDecision::Passthrough(reason);
		}
		self.evaluate_anchor(resolve().as_ref(), current)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::platform::Modifiers;
	use crate::testing::{MockClickEvent, MockDom, MockNode};
	use rstest::{fixture, rstest};

	#[fixture]
	fn registry() -> PathRegistry {
		PathRegistry::new(["/", "/about", "/contact-us"]).unwrap()
	}

	#[fixture]
	fn current() -> CurrentLocation {
		CurrentLocation::parse("https://app.example/about").unwrap()
	}

	fn anchor(attrs: &[(&str, &str)]) -> (MockDom, MockNode) {
		let dom = MockDom::new();
		let mut builder = dom.element("a");
		for (name, value) in attrs {
			builder = builder.attr(*name, *value);
		}
		let node = builder.build();
		dom.body().append(&node);
		(dom, node)
	}

	#[rstest]
	fn test_plain_click_on_known_path_is_intercepted(
		registry: PathRegistry,
		current: CurrentLocation,
	) {
		let (_dom, link) = anchor(&[("href", "/contact-us")]);
		let decision = NavigationPolicy::new(&registry).evaluate_anchor(Some(&link), &current);

		match decision {
			NavigationDecision::Intercept(url) => {
				assert_eq!(url.as_str(), "https://app.example/contact-us")
			}
			other => panic!("expected intercept, got {other:?}"),
		}
	}

	#[rstest]
	#[case(&[("href", "/about"), ("target", "_blank")], PassthroughReason::ForeignTarget)]
	#[case(&[("href", "/about"), ("target", "frame-1")], PassthroughReason::ForeignTarget)]
	#[case(&[("href", "/about"), ("download", "")], PassthroughReason::Download)]
	#[case(&[("href", "https://external.example/")], PassthroughReason::CrossOrigin)]
	#[case(&[("href", "http://app.example/about")], PassthroughReason::CrossOrigin)]
	#[case(&[("href", "/admin/")], PassthroughReason::UnknownPath)]
	#[case(&[("href", "http://[::1")], PassthroughReason::UnresolvableHref)]
	fn test_anchor_passthrough(
		registry: PathRegistry,
		current: CurrentLocation,
		#[case] attrs: &[(&str, &str)],
		#[case] expected: PassthroughReason,
	) {
		let (_dom, link) = anchor(attrs);
		let decision = NavigationPolicy::new(&registry).evaluate_anchor(Some(&link), &current);
		assert_eq!(decision, NavigationDecision::Passthrough(expected));
	}

	#[rstest]
	#[case("")]
	#[case("_self")]
	#[case("_SELF")]
	fn test_self_target_is_intercepted(
		registry: PathRegistry,
		current: CurrentLocation,
		#[case] target: &str,
	) {
		let (_dom, link) = anchor(&[("href", "/"), ("target", target)]);
		let decision = NavigationPolicy::new(&registry).evaluate_anchor(Some(&link), &current);
		assert!(decision.is_intercept());
	}

	#[rstest]
	fn test_missing_anchor(registry: PathRegistry, current: CurrentLocation) {
		let decision =
			NavigationPolicy::new(&registry).evaluate_anchor(None::<&MockNode>, &current);
		assert_eq!(
			decision,
			NavigationDecision::Passthrough(PassthroughReason::NoAnchor)
		);
	}

	#[rstest]
	fn test_target_checked_before_origin(registry: PathRegistry, current: CurrentLocation) {
		let (_dom, link) = anchor(&[("href", "https://external.example/"), ("target", "_blank")]);
		let decision = NavigationPolicy::new(&registry).evaluate_anchor(Some(&link), &current);
		assert_eq!(
			decision,
			NavigationDecision::Passthrough(PassthroughReason::ForeignTarget)
		);
	}

	#[rstest]
	fn test_event_screening_order(registry: PathRegistry, current: CurrentLocation) {
		let (dom, link) = anchor(&[("href", "/about")]);
		let policy = NavigationPolicy::new(&registry);

		let prevented = MockClickEvent::on(&dom, &link).button(2).already_prevented();
		assert_eq!(
			policy.decide(&prevented, || Some(link.clone()), &current),
			NavigationDecision::Passthrough(PassthroughReason::DefaultPrevented)
		);

		let middle = MockClickEvent::on(&dom, &link)
			.button(1)
			.modifiers(Modifiers { ctrl: true, ..Modifiers::NONE });
		assert_eq!(
			policy.decide(&middle, || Some(link.clone()), &current),
			NavigationDecision::Passthrough(PassthroughReason::NonPrimaryButton)
		);

		let shifted = MockClickEvent::on(&dom, &link).modifiers(Modifiers {
			shift: true,
			..Modifiers::NONE
		});
		assert_eq!(
			policy.decide(&shifted, || Some(link.clone()), &current),
			NavigationDecision::Passthrough(PassthroughReason::ModifierHeld)
		);
	}

	#[rstest]
	fn test_resolver_not_called_for_modifier_click(
		registry: PathRegistry,
		current: CurrentLocation,
	) {
		let (dom, link) = anchor(&[("href", "/about")]);
		let event = MockClickEvent::on(&dom, &link).modifiers(Modifiers {
			meta: true,
			..Modifiers::NONE
		});

		let decision = NavigationPolicy::new(&registry).decide(
			&event,
			|| -> Option<MockNode> { panic!("resolver must not run") },
			&current,
		);
		assert!(!decision.is_intercept());
	}

	#[test]
	fn test_passthrough_reason_display() {
		assert_eq!(
			PassthroughReason::CrossOrigin.to_string(),
			"link points to another origin"
		);
	}
}
