//! Link resolution.
//!
//! Finds the anchor a click was meant to activate. `Element.closest` stops at
//! shadow roots, so a link rendered inside a custom element's shadow tree is
//! invisible to a plain ancestor search from the document. Instead the
//! event's composed path is walked from the innermost target outwards, and at
//! each step the search restarts from the node's own element scope.

use crate::platform::{ClickEvent, DomNode, PathEntry};

/// Resolves the anchor targeted by `event`, if any.
pub fn resolve_anchor<E: ClickEvent>(event: &E) -> Option<<E::Node as DomNode>::Anchor> {
	resolve_in_path(event.composed_path())
}

/// Resolves the anchor from an already captured composed path.
pub fn resolve_in_path<N, I>(path: I) -> Option<N::Anchor>
where
	N: DomNode,
	I: IntoIterator<Item = PathEntry<N>>,
{
	for entry in path {
		let PathEntry::Node(node) = entry else {
			continue;
		};

		if let Some(anchor) = node.as_anchor() {
			return Some(anchor);
		}

		if let Some(anchor) = element_scope(&node).and_then(|scope| scope.closest_anchor()) {
			return Some(anchor);
		}
	}
	None
}

/// The element from which an ancestor search for `node` starts.
///
/// An element is its own scope. Other nodes inside a shadow tree are scoped
/// to the tree's host; anything else has no scope.
pub fn element_scope<N: DomNode>(node: &N) -> Option<N> {
	if node.is_element() {
		Some(node.clone())
	} else {
		node.shadow_host()
	}
}
