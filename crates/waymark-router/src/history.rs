//! History synchronization.
//!
//! Applies an intercepted navigation to the session history. A destination
//! that only differs from the current location by its fragment is pushed
//! without a render so the browser can perform its own anchor scrolling.

use crate::error::RouterError;
use crate::location::CurrentLocation;
use crate::platform::LocationProvider;

/// What the synchronizer did with a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
	/// The destination is the current location; nothing was pushed.
	Unchanged,
	/// Only the fragment changed; an entry was pushed and no render is needed.
	FragmentOnly,
	/// A different document; an entry was pushed and the view must be rendered.
	RouteChange,
}

impl SyncOutcome {
	/// Whether the router must render after this outcome.
	pub fn needs_render(&self) -> bool {
		matches!(self, Self::RouteChange)
	}
}

/// Pushes `destination` (pathname, search and hash) onto the session history.
///
/// The current location is read from `location` when this runs.
pub fn synchronize<L>(location: &L, destination: &str) -> Result<SyncOutcome, RouterError>
where
	L: LocationProvider + ?Sized,
{
	let current = CurrentLocation::read(location)?;

	if destination == current.relative_reference() {
		return Ok(SyncOutcome::Unchanged);
	}

	let (path_and_search, hash) = destination.split_once('#').unwrap_or((destination, ""));

	if path_and_search == current.path_and_search() {
		location.push_url(destination)?;
		return Ok(SyncOutcome::FragmentOnly);
	}

	location.push_url(destination)?;
	if hash.is_empty() {
		location.scroll_to_origin();
	}
	Ok(SyncOutcome::RouteChange)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::MockLocation;
	use rstest::rstest;

	#[test]
	fn test_same_location_is_noop() {
		let location = MockLocation::new("https://app.example/about?x=1#team");

		let outcome = synchronize(&location, "/about?x=1#team").unwrap();

		assert_eq!(outcome, SyncOutcome::Unchanged);
		assert!(location.pushed().is_empty());
		assert_eq!(location.scroll_resets(), 0);
	}

	#[rstest]
	#[case("https://app.example/about", "/about#team")]
	#[case("https://app.example/about#intro", "/about#team")]
	#[case("https://app.example/about?x=1", "/about?x=1#team")]
	#[case("https://app.example/about#team", "/about")]
	fn test_fragment_only_change(#[case] current: &str, #[case] destination: &str) {
		let location = MockLocation::new(current);

		let outcome = synchronize(&location, destination).unwrap();

		assert_eq!(outcome, SyncOutcome::FragmentOnly);
		assert!(!outcome.needs_render());
		assert_eq!(location.pushed(), vec![destination.to_string()]);
		assert_eq!(location.scroll_resets(), 0);
	}

	#[test]
	fn test_route_change_without_fragment_resets_scroll() {
		let location = MockLocation::new("https://app.example/");

		let outcome = synchronize(&location, "/contact-us").unwrap();

		assert_eq!(outcome, SyncOutcome::RouteChange);
		assert!(outcome.needs_render());
		assert_eq!(location.pushed(), vec!["/contact-us".to_string()]);
		assert_eq!(location.scroll_resets(), 1);
		assert_eq!(location.current().pathname(), "/contact-us");
	}

	#[test]
	fn test_route_change_with_fragment_keeps_scroll() {
		let location = MockLocation::new("https://app.example/about?x=1");

		let outcome = synchronize(&location, "/about#team").unwrap();

		// The search differs, so this is a different document.
		assert_eq!(outcome, SyncOutcome::RouteChange);
		assert_eq!(location.pushed(), vec!["/about#team".to_string()]);
		assert_eq!(location.scroll_resets(), 0);
	}

	#[test]
	fn test_search_change_is_route_change() {
		let location = MockLocation::new("https://app.example/about");

		let outcome = synchronize(&location, "/about?tab=2").unwrap();

		assert_eq!(outcome, SyncOutcome::RouteChange);
		assert_eq!(location.scroll_resets(), 1);
	}

	#[test]
	fn test_push_failure_propagates() {
		let location = MockLocation::new("https://app.example/");
		location.fail_pushes(true);

		let result = synchronize(&location, "/about");

		assert!(matches!(result, Err(RouterError::History(_))));
		assert_eq!(location.scroll_resets(), 0);
	}
}
