use crate::platform::{AnchorElement, ClickEvent, DomNode, Modifiers, PathEntry};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, MouseEvent, Node, ShadowRoot};

const ANCHOR_SELECTOR: &str = "a[href]";

/// An `HTMLAnchorElement` with an `href` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebAnchor(HtmlAnchorElement);

impl WebAnchor {
	/// The underlying element.
	pub fn element(&self) -> &HtmlAnchorElement {
		&self.0
	}
}

impl AnchorElement for WebAnchor {
	fn href(&self) -> String {
		// The IDL attribute is already resolved against the document base.
		self.0.href()
	}

	fn target(&self) -> String {
		self.0.target()
	}

	fn has_download(&self) -> bool {
		self.0.has_attribute("download")
	}
}

/// A DOM node from an event's composed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebNode(Node);

impl WebNode {
	/// Wraps a node.
	pub fn new(node: Node) -> Self {
		Self(node)
	}

	/// The underlying node.
	pub fn node(&self) -> &Node {
		&self.0
	}
}

impl DomNode for WebNode {
	type Anchor = WebAnchor;

	fn as_anchor(&self) -> Option<WebAnchor> {
		let anchor = self.0.dyn_ref::<HtmlAnchorElement>()?;
		anchor
			.has_attribute("href")
			.then(|| WebAnchor(anchor.clone()))
	}

	fn is_element(&self) -> bool {
		self.0.is_instance_of::<Element>()
	}

	fn shadow_host(&self) -> Option<WebNode> {
		let root = self.0.get_root_node().dyn_into::<ShadowRoot>().ok()?;
		Some(WebNode(root.host().into()))
	}

	fn closest_anchor(&self) -> Option<WebAnchor> {
		let element = self.0.dyn_ref::<Element>()?;
		let found = element.closest(ANCHOR_SELECTOR).ok().flatten()?;
		// SVG `<a>` elements match the selector but are not HTML anchors.
		found.dyn_into::<HtmlAnchorElement>().ok().map(WebAnchor)
	}
}

/// A DOM `click` event.
#[derive(Debug, Clone)]
pub struct WebClickEvent(MouseEvent);

impl WebClickEvent {
	/// Wraps a mouse event.
	pub fn new(event: MouseEvent) -> Self {
		Self(event)
	}
}

impl ClickEvent for WebClickEvent {
	type Node = WebNode;

	fn default_prevented(&self) -> bool {
		self.0.default_prevented()
	}

	fn button(&self) -> i16 {
		self.0.button()
	}

	fn modifiers(&self) -> Modifiers {
		Modifiers {
			meta: self.0.meta_key(),
			ctrl: self.0.ctrl_key(),
			shift: self.0.shift_key(),
			alt: self.0.alt_key(),
		}
	}

	fn composed_path(&self) -> Vec<PathEntry<WebNode>> {
		self.0
			.composed_path()
			.iter()
			.map(|target| match target.dyn_into::<Node>() {
				Ok(node) => PathEntry::Node(WebNode(node)),
				Err(_) => PathEntry::Other,
			})
			.collect()
	}

	fn prevent_default(&self) {
		self.0.prevent_default();
	}
}
