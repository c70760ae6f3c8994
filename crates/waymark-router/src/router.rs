//! The SPA router.
//!
//! [`SpaRouter`] ties the components together and exposes the three entry
//! points of the navigation layer:
//!
//! - [`SpaRouter::handle_click`]: a document `click`. Runs synchronously so the
//!   default action can still be prevented, and reports whether a render must
//!   follow.
//! - [`SpaRouter::handle_pop_state`]: back/forward navigation.
//! - [`SpaRouter::handle_document_ready`]: initial render once the document is
//!   parsed.
//!
//! The router keeps no navigation state of its own. Every render reads the
//! live address bar, so a render that completes late shows whatever location
//! is current by then.

use crate::error::RouterError;
use crate::history::{SyncOutcome, synchronize};
use crate::location::{CurrentLocation, relative_reference};
use crate::platform::{ClickEvent, LocationProvider};
use crate::policy::{NavigationDecision, NavigationPolicy, PassthroughReason};
use crate::registry::{PathRegistry, ViewName};
use crate::resolve::resolve_anchor;
use crate::view::{LoadedView, ViewLoader, ViewRenderer, ViewResolver};
use waymark_core::debug_log;

/// Result of handling a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
	/// The browser keeps the click.
	Passthrough(PassthroughReason),
	/// The click was intercepted and history updated as described.
	Intercepted(SyncOutcome),
}

impl ClickOutcome {
	/// Whether the default action was prevented.
	pub fn is_intercepted(&self) -> bool {
		matches!(self, Self::Intercepted(_))
	}

	/// Whether the caller must follow up with [`SpaRouter::render_current`].
	pub fn needs_render(&self) -> bool {
		matches!(self, Self::Intercepted(outcome) if outcome.needs_render())
	}
}

/// Client-side router over a location provider, a view loader and a renderer.
pub struct SpaRouter<P, L, R> {
	location: P,
	views: ViewResolver<L, R>,
}

impl<P, L, R> std::fmt::Debug for SpaRouter<P, L, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SpaRouter")
			.field("views", &self.views)
			.finish_non_exhaustive()
	}
}

impl<P, L, R> SpaRouter<P, L, R>
where
	P: LocationProvider,
	L: ViewLoader,
	R: ViewRenderer<LoadedView<L>>,
{
	/// Creates a router.
	pub fn new(registry: PathRegistry, location: P, loader: L, renderer: R) -> Self {
		Self {
			location,
			views: ViewResolver::new(registry, loader, renderer),
		}
	}

	/// Creates a router from a list of paths, the first being the root.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Configuration`] if `paths` is empty.
	pub fn with_paths<I, S>(paths: I, location: P, loader: L, renderer: R) -> Result<Self, RouterError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Ok(Self::new(PathRegistry::new(paths)?, location, loader, renderer))
	}

	/// The path registry.
	pub fn registry(&self) -> &PathRegistry {
		self.views.registry()
	}

	/// The location provider.
	pub fn location(&self) -> &P {
		&self.location
	}

	/// Reads the current address bar.
	pub fn current_location(&self) -> Result<CurrentLocation, RouterError> {
		CurrentLocation::read(&self.location)
	}

	/// Handles a document click.
	///
	/// If the click is intercepted its default action is prevented before
	/// anything else happens, then the history entry is pushed. When the
	/// outcome [needs a render](ClickOutcome::needs_render) the caller awaits
	/// [`render_current`](Self::render_current).
	pub fn handle_click<E: ClickEvent>(&self, event: &E) -> Result<ClickOutcome, RouterError> {
		let current = self.current_location()?;
		let decision =
			NavigationPolicy::new(self.registry()).decide(event, || resolve_anchor(event), &current);
		let destination = match decision {
			NavigationDecision::Intercept(destination) => destination,
			NavigationDecision::Passthrough(reason) => {
				debug_log!("click passthrough: {}", reason);
				return Ok(ClickOutcome::Passthrough(reason));
			}
		};

		event.prevent_default();

		let destination = relative_reference(&destination);
		let outcome = synchronize(&self.location, &destination)?;
		debug_log!("click intercepted: {} ({:?})", destination, outcome);
		Ok(ClickOutcome::Intercepted(outcome))
	}

	/// Renders the view of `pathname`, or of the address bar when `None`.
	pub async fn render(&self, pathname: Option<&str>) -> Result<ViewName, RouterError> {
		self.views.render(&self.location, pathname).await
	}

	/// Renders the view matching the address bar.
	pub async fn render_current(&self) -> Result<ViewName, RouterError> {
		self.render(None).await
	}

	/// Handles `popstate`: the browser already moved the address bar.
	pub async fn handle_pop_state(&self) -> Result<ViewName, RouterError> {
		self.render_current().await
	}

	/// Handles the document-ready signal.
	pub async fn handle_document_ready(&self) -> Result<ViewName, RouterError> {
		self.render_current().await
	}

	/// Handles a click and, if required, renders the new view.
	///
	/// Convenience for callers that can await inside their click handler;
	/// the browser binding uses [`handle_click`](Self::handle_click) directly so
	/// that `preventDefault` runs synchronously.
	pub async fn navigate_click<E: ClickEvent>(
		&self,
		event: &E,
	) -> Result<(ClickOutcome, Option<ViewName>), RouterError> {
		let outcome = self.handle_click(event)?;
		let rendered = if outcome.needs_render() {
			Some(self.render_current().await?)
		} else {
			None
		};
		Ok((outcome, rendered))
	}
}
