//! Platform abstraction.
//!
//! The routing engine never touches `web_sys` directly. It is written against
//! the traits in this module, which the [`web`](crate::web) binding implements
//! over real browser objects and [`testing`](crate::testing) implements in
//! memory. Everything is single-threaded, so none of these traits require
//! `Send` or `Sync`.

use crate::error::RouterError;

/// `MouseEvent.button` value of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Reads and writes the browser's navigation state.
///
/// Implementations must always report the live address bar: the router relies
/// on reading the current location at the moment each step runs rather than
/// on a snapshot taken when the triggering event was dispatched.
pub trait LocationProvider {
	/// Returns the absolute URL currently shown in the address bar.
	fn href(&self) -> Result<String, RouterError>;

	/// Pushes a new session history entry for `url` without a state object.
	///
	/// `url` is a relative reference (pathname, search and hash).
	fn push_url(&self, url: &str) -> Result<(), RouterError>;

	/// Scrolls the document to its top-left corner without smooth scrolling.
	fn scroll_to_origin(&self);
}

/// An `<a>` element carrying an `href` attribute.
pub trait AnchorElement {
	/// The link destination as reported by the anchor.
	///
	/// May be absolute or relative; the router resolves it against the current
	/// location before inspecting it.
	fn href(&self) -> String;

	/// The `target` attribute, empty when absent.
	fn target(&self) -> String;

	/// Whether the `download` attribute is present.
	fn has_download(&self) -> bool;
}

/// A node of the DOM tree as seen from an event's composed path.
pub trait DomNode: Clone {
	/// Anchor type produced by this node family.
	type Anchor: AnchorElement;

	/// Returns this node as an anchor if it is an `<a>` element with `href`.
	fn as_anchor(&self) -> Option<Self::Anchor>;

	/// Whether this node is an element (as opposed to text, a document, a
	/// shadow root...).
	fn is_element(&self) -> bool;

	/// Host element of this node's root, if the node lives in a shadow tree.
	fn shadow_host(&self) -> Option<Self>;

	/// Closest ancestor-or-self `a[href]`.
	///
	/// Like `Element.closest`, the search stops at the root of the node's own
	/// tree and never crosses a shadow boundary.
	fn closest_anchor(&self) -> Option<Self::Anchor>;
}

/// One entry of an event's composed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEntry<N> {
	/// A DOM node.
	Node(N),
	/// A non-node event target such as `Window`.
	Other,
}

/// Keyboard modifiers held during an activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
	/// Meta (Command / Windows) key.
	pub meta: bool,
	/// Control key.
	pub ctrl: bool,
	/// Shift key.
	pub shift: bool,
	/// Alt (Option) key.
	pub alt: bool,
}

impl Modifiers {
	/// No modifier held.
	pub const NONE: Self = Self {
		meta: false,
		ctrl: false,
		shift: false,
		alt: false,
	};

	/// Returns true if any modifier is held.
	pub fn any(&self) -> bool {
		self.meta || self.ctrl || self.shift || self.alt
	}
}

/// A pointer activation (`click`) event.
pub trait ClickEvent {
	/// Node type of the composed path.
	type Node: DomNode;

	/// Whether another listener already called `preventDefault`.
	fn default_prevented(&self) -> bool;

	/// The `MouseEvent.button` value.
	fn button(&self) -> i16;

	/// Modifier keys held during the click.
	fn modifiers(&self) -> Modifiers;

	/// The composed dispatch path, innermost target first.
	fn composed_path(&self) -> Vec<PathEntry<Self::Node>>;

	/// Suppresses the browser's default action.
	fn prevent_default(&self);
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Modifiers::NONE, false)]
	#[case(Modifiers { meta: true, ..Modifiers::NONE }, true)]
	#[case(Modifiers { ctrl: true, ..Modifiers::NONE }, true)]
	#[case(Modifiers { shift: true, ..Modifiers::NONE }, true)]
	#[case(Modifiers { alt: true, ..Modifiers::NONE }, true)]
	fn test_modifiers_any(#[case] modifiers: Modifiers, #[case] expected: bool) {
		assert_eq!(modifiers.any(), expected);
	}

	#[test]
	fn test_modifiers_default_is_none() {
		assert_eq!(Modifiers::default(), Modifiers::NONE);
	}
}
