//! In-memory browser for exercising the router without a DOM.
//!
//! - [`MockLocation`]: address bar and session history
//! - [`MockDom`] / [`MockNode`]: element tree with shadow roots
//! - [`MockClickEvent`]: click with a composed path computed from the tree
//! - [`RecordingRenderer`]: renderer that remembers what it was given
//!
//! All handles are cheap `Rc` clones sharing the same state, so a test can keep
//! one copy while the router owns another.

use crate::error::RouterError;
use crate::location::CurrentLocation;
use crate::platform::{AnchorElement, ClickEvent, DomNode, LocationProvider, Modifiers, PathEntry};
use crate::view::ViewRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use url::Url;

/// Address bar and history stack held in memory.
#[derive(Debug, Clone)]
pub struct MockLocation {
	inner: Rc<LocationState>,
}

#[derive(Debug)]
struct LocationState {
	href: RefCell<Url>,
	pushed: RefCell<Vec<String>>,
	scroll_resets: Cell<usize>,
	fail_pushes: Cell<bool>,
}

impl MockLocation {
	/// Creates a location showing `href`.
	///
	/// # Panics
	///
	/// Panics if `href` is not an absolute URL.
	pub fn new(href: &str) -> Self {
		let url = Url::parse(href).unwrap_or_else(|e| panic!("invalid mock href {href:?}: {e}"));
		Self {
			inner: Rc::new(LocationState {
				href: RefCell::new(url),
				pushed: RefCell::new(Vec::new()),
				scroll_resets: Cell::new(0),
				fail_pushes: Cell::new(false),
			}),
		}
	}

	/// Moves the address bar as the browser would on back/forward.
	///
	/// Nothing is recorded as pushed.
	pub fn browser_navigate(&self, href: &str) {
		let url = self
			.inner
			.href
			.borrow()
			.join(href)
			.unwrap_or_else(|e| panic!("invalid mock href {href:?}: {e}"));
		*self.inner.href.borrow_mut() = url;
	}

	/// Makes subsequent pushes fail like a browser `SecurityError`.
	pub fn fail_pushes(&self, fail: bool) {
		self.inner.fail_pushes.set(fail);
	}

	/// Relative references pushed so far, oldest first.
	pub fn pushed(&self) -> Vec<String> {
		self.inner.pushed.borrow().clone()
	}

	/// Number of scroll-to-origin calls.
	pub fn scroll_resets(&self) -> usize {
		self.inner.scroll_resets.get()
	}

	/// The current location.
	pub fn current(&self) -> CurrentLocation {
		// The stored URL is always absolute.
		CurrentLocation::parse(self.inner.href.borrow().as_str())
			.unwrap_or_else(|e| panic!("mock location corrupted: {e}"))
	}
}

impl LocationProvider for MockLocation {
	fn href(&self) -> Result<String, RouterError> {
		Ok(self.inner.href.borrow().to_string())
	}

	fn push_url(&self, url: &str) -> Result<(), RouterError> {
		if self.inner.fail_pushes.get() {
			return Err(RouterError::History(
				"SecurityError: pushState rejected".to_string(),
			));
		}
		let next = self
			.inner
			.href
			.borrow()
			.join(url)
			.map_err(|e| RouterError::invalid_url(url, e))?;
		*self.inner.href.borrow_mut() = next;
		self.inner.pushed.borrow_mut().push(url.to_string());
		Ok(())
	}

	fn scroll_to_origin(&self) {
		self.inner.scroll_resets.set(self.inner.scroll_resets.get() + 1);
	}
}

#[derive(Debug)]
enum NodeKind {
	Document,
	Element {
		tag: String,
		attrs: RefCell<Vec<(String, String)>>,
	},
	Text,
	ShadowRoot {
		host: MockNode,
	},
}

#[derive(Debug)]
struct NodeData {
	kind: NodeKind,
	parent: RefCell<Option<MockNode>>,
}

/// A node of the in-memory DOM.
///
/// Parents are held strongly by their children and hosts by their shadow
/// roots, never the other way round, so trees are dropped cleanly.
#[derive(Debug, Clone)]
pub struct MockNode(Rc<NodeData>);

impl PartialEq for MockNode {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for MockNode {}

impl MockNode {
	fn with_kind(kind: NodeKind) -> Self {
		Self(Rc::new(NodeData {
			kind,
			parent: RefCell::new(None),
		}))
	}

	/// Appends `child` to this node.
	pub fn append(&self, child: &MockNode) {
		*child.0.parent.borrow_mut() = Some(self.clone());
	}

	/// Attaches a shadow root to this element and returns it.
	pub fn attach_shadow(&self) -> MockNode {
		Self::with_kind(NodeKind::ShadowRoot { host: self.clone() })
	}

	/// Tag name, for elements.
	pub fn tag(&self) -> Option<&str> {
		match &self.0.kind {
			NodeKind::Element { tag, .. } => Some(tag.as_str()),
			_ => None,
		}
	}

	/// Attribute value, for elements.
	pub fn attribute(&self, name: &str) -> Option<String> {
		match &self.0.kind {
			NodeKind::Element { attrs, .. } => attrs
				.borrow()
				.iter()
				.find(|(key, _)| key == name)
				.map(|(_, value)| value.clone()),
			_ => None,
		}
	}

	/// Sets an attribute on an element.
	pub fn set_attribute(&self, name: &str, value: &str) {
		if let NodeKind::Element { attrs, .. } = &self.0.kind {
			let mut attrs = attrs.borrow_mut();
			match attrs.iter_mut().find(|(key, _)| key == name) {
				Some(entry) => entry.1 = value.to_string(),
				None => attrs.push((name.to_string(), value.to_string())),
			}
		}
	}

	/// Parent node within the same tree.
	pub fn parent(&self) -> Option<MockNode> {
		self.0.parent.borrow().clone()
	}

	fn root(&self) -> MockNode {
		let mut node = self.clone();
		while let Some(parent) = node.parent() {
			node = parent;
		}
		node
	}

	fn is_anchor_with_href(&self) -> bool {
		self.tag().is_some_and(|tag| tag.eq_ignore_ascii_case("a"))
			&& self.attribute("href").is_some()
	}
}

impl AnchorElement for MockNode {
	fn href(&self) -> String {
		self.attribute("href").unwrap_or_default()
	}

	fn target(&self) -> String {
		self.attribute("target").unwrap_or_default()
	}

	fn has_download(&self) -> bool {
		self.attribute("download").is_some()
	}
}

impl DomNode for MockNode {
	type Anchor = MockNode;

	fn as_anchor(&self) -> Option<MockNode> {
		self.is_anchor_with_href().then(|| self.clone())
	}

	fn is_element(&self) -> bool {
		matches!(self.0.kind, NodeKind::Element { .. })
	}

	fn shadow_host(&self) -> Option<MockNode> {
		match &self.root().0.kind {
			NodeKind::ShadowRoot { host } => Some(host.clone()),
			_ => None,
		}
	}

	fn closest_anchor(&self) -> Option<MockNode> {
		let mut node = Some(self.clone());
		while let Some(current) = node {
			if current.is_anchor_with_href() {
				return Some(current);
			}
			node = current.parent();
		}
		None
	}
}

/// Builder for element nodes.
#[derive(Debug)]
pub struct ElementBuilder {
	tag: String,
	attrs: Vec<(String, String)>,
}

impl ElementBuilder {
	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Creates the detached element.
	pub fn build(self) -> MockNode {
		MockNode::with_kind(NodeKind::Element {
			tag: self.tag,
			attrs: RefCell::new(self.attrs),
		})
	}
}

/// A document with a `<body>`.
#[derive(Debug, Clone)]
pub struct MockDom {
	document: MockNode,
	body: MockNode,
}

impl Default for MockDom {
	fn default() -> Self {
		Self::new()
	}
}

impl MockDom {
	/// Creates `document > html > body`.
	pub fn new() -> Self {
		let document = MockNode::with_kind(NodeKind::Document);
		let html = ElementBuilder {
			tag: "html".to_string(),
			attrs: Vec::new(),
		}
		.build();
		document.append(&html);
		let body = ElementBuilder {
			tag: "body".to_string(),
			attrs: Vec::new(),
		}
		.build();
		html.append(&body);
		Self { document, body }
	}

	/// Starts building an element.
	pub fn element(&self, tag: impl Into<String>) -> ElementBuilder {
		ElementBuilder {
			tag: tag.into(),
			attrs: Vec::new(),
		}
	}

	/// Creates a detached text node.
	pub fn text(&self, _content: &str) -> MockNode {
		MockNode::with_kind(NodeKind::Text)
	}

	/// The document node.
	pub fn document(&self) -> MockNode {
		self.document.clone()
	}

	/// The `<body>` element.
	pub fn body(&self) -> MockNode {
		self.body.clone()
	}

	/// The composed path of an event dispatched at `target`.
	///
	/// Walks parents, steps from each shadow root to its host, and ends with
	/// the window (a non-node entry).
	pub fn composed_path(&self, target: &MockNode) -> Vec<PathEntry<MockNode>> {
		let mut path = Vec::new();
		let mut node = Some(target.clone());
		while let Some(current) = node {
			node = match &current.0.kind {
				NodeKind::ShadowRoot { host } => Some(host.clone()),
				_ => current.parent(),
			};
			path.push(PathEntry::Node(current));
		}
		path.push(PathEntry::Other);
		path
	}
}

/// A click event with a precomputed composed path.
#[derive(Debug, Clone)]
pub struct MockClickEvent {
	path: Vec<PathEntry<MockNode>>,
	button: i16,
	modifiers: Modifiers,
	default_prevented: Rc<Cell<bool>>,
	prevent_calls: Rc<Cell<usize>>,
}

impl MockClickEvent {
	/// A plain primary-button click on `target`.
	pub fn on(dom: &MockDom, target: &MockNode) -> Self {
		Self::with_path(dom.composed_path(target))
	}

	/// A plain primary-button click with an explicit composed path.
	pub fn with_path(path: Vec<PathEntry<MockNode>>) -> Self {
		Self {
			path,
			button: crate::platform::PRIMARY_BUTTON,
			modifiers: Modifiers::NONE,
			default_prevented: Rc::new(Cell::new(false)),
			prevent_calls: Rc::new(Cell::new(0)),
		}
	}

	/// Sets the pressed button.
	pub fn button(mut self, button: i16) -> Self {
		self.button = button;
		self
	}

	/// Sets the held modifiers.
	pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers = modifiers;
		self
	}

	/// Marks the event as already prevented by another listener.
	pub fn already_prevented(self) -> Self {
		self.default_prevented.set(true);
		self
	}

	/// Whether the default action is prevented.
	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented.get()
	}

	/// Number of `prevent_default` calls made on this event.
	pub fn prevent_default_calls(&self) -> usize {
		self.prevent_calls.get()
	}
}

impl ClickEvent for MockClickEvent {
	type Node = MockNode;

	fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}

	fn button(&self) -> i16 {
		self.button
	}

	fn modifiers(&self) -> Modifiers {
		self.modifiers
	}

	fn composed_path(&self) -> Vec<PathEntry<MockNode>> {
		self.path.clone()
	}

	fn prevent_default(&self) {
		self.default_prevented.set(true);
		self.prevent_calls.set(self.prevent_calls.get() + 1);
	}
}

/// Renderer that records the string form of every view it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
	rendered: Rc<RefCell<Vec<String>>>,
}

impl RecordingRenderer {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Views rendered so far, oldest first.
	pub fn rendered(&self) -> Vec<String> {
		self.rendered.borrow().clone()
	}
}

impl<V: ToString> ViewRenderer<V> for RecordingRenderer {
	fn render(&self, view: V) {
		self.rendered.borrow_mut().push(view.to_string());
	}
}
