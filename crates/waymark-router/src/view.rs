//! View resolution and rendering.
//!
//! A pathname is mapped to a [`ViewName`], the host loader is awaited for the
//! matching [`ViewModule`], and a fresh instance of the module's view is handed
//! to the [`ViewRenderer`].

use crate::error::{BoxError, RouterError};
use crate::location::CurrentLocation;
use crate::platform::LocationProvider;
use crate::registry::{PathRegistry, ViewName};
use futures::future::LocalBoxFuture;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;
use waymark_core::info_log;

/// An asynchronously loaded view module.
///
/// The module is a factory: every render instantiates a new view from it.
pub trait ViewModule {
	/// The renderable value produced by this module.
	type View;

	/// Creates a new view instance.
	fn instantiate(&self) -> Self::View;
}

impl<V> ViewModule for fn() -> V {
	type View = V;

	fn instantiate(&self) -> V {
		self()
	}
}

/// A module whose view is built with [`Default`].
#[derive(Debug)]
pub struct DefaultView<V>(PhantomData<fn() -> V>);

impl<V> DefaultView<V> {
	/// Creates the module.
	pub fn new() -> Self {
		Self(PhantomData)
	}
}

impl<V> Default for DefaultView<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> Clone for DefaultView<V> {
	fn clone(&self) -> Self {
		Self::new()
	}
}

impl<V: Default> ViewModule for DefaultView<V> {
	type View = V;

	fn instantiate(&self) -> V {
		V::default()
	}
}

/// A module backed by a shared constructor closure.
pub struct ViewFactory<V> {
	build: Rc<dyn Fn() -> V>,
}

impl<V> ViewFactory<V> {
	/// Wraps a constructor.
	pub fn new<F>(build: F) -> Self
	where
		F: Fn() -> V + 'static,
	{
		Self {
			build: Rc::new(build),
		}
	}
}

impl<V> Clone for ViewFactory<V> {
	fn clone(&self) -> Self {
		Self {
			build: Rc::clone(&self.build),
		}
	}
}

impl<V> std::fmt::Debug for ViewFactory<V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ViewFactory").finish_non_exhaustive()
	}
}

impl<V> ViewModule for ViewFactory<V> {
	type View = V;

	fn instantiate(&self) -> V {
		(self.build)()
	}
}

/// Loads the module of a view by name.
pub trait ViewLoader {
	/// Module type returned by the loader.
	type Module: ViewModule;
	/// Loader failure.
	type Error: Into<BoxError>;

	/// Starts loading the module for `name`.
	fn load(&self, name: &ViewName) -> LocalBoxFuture<'static, Result<Self::Module, Self::Error>>;
}

impl<F, Fut, M, E> ViewLoader for F
where
	F: Fn(ViewName) -> Fut,
	Fut: Future<Output = Result<M, E>> + 'static,
	M: ViewModule,
	E: Into<BoxError>,
{
	type Module = M;
	type Error = E;

	fn load(&self, name: &ViewName) -> LocalBoxFuture<'static, Result<M, E>> {
		Box::pin(self(name.clone()))
	}
}

/// Receives freshly instantiated views.
pub trait ViewRenderer<V> {
	/// Displays `view`.
	fn render(&self, view: V);
}

impl<V, F> ViewRenderer<V> for F
where
	F: Fn(V),
{
	fn render(&self, view: V) {
		self(view)
	}
}

/// View type produced by loader `L`.
pub type LoadedView<L> = <<L as ViewLoader>::Module as ViewModule>::View;

/// Maps pathnames to views and renders them.
pub struct ViewResolver<L, R> {
	registry: PathRegistry,
	loader: L,
	renderer: R,
}

impl<L, R> std::fmt::Debug for ViewResolver<L, R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ViewResolver")
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}

impl<L, R> ViewResolver<L, R>
where
	L: ViewLoader,
	R: ViewRenderer<LoadedView<L>>,
{
	/// Creates a resolver.
	pub fn new(registry: PathRegistry, loader: L, renderer: R) -> Self {
		Self {
			registry,
			loader,
			renderer,
		}
	}

	/// The registry used for view names.
	pub fn registry(&self) -> &PathRegistry {
		&self.registry
	}

	/// Loads and renders the view for `pathname`.
	///
	/// Returns the name of the rendered view.
	pub async fn render_path(&self, pathname: &str) -> Result<ViewName, RouterError> {
		let name = self.registry.view_name(pathname);
		let module = self
			.loader
			.load(&name)
			.await
			.map_err(|err| RouterError::ViewLoad {
				view: name.to_string(),
				source: err.into(),
			})?;

		info_log!("rendering view '{}' for {}", name, pathname);
		self.renderer.render(module.instantiate());
		Ok(name)
	}

	/// Loads and renders `pathname`, or the address bar's pathname when `None`.
	///
	/// The address bar is read when this is called, not when the event that
	/// led to it was dispatched.
	pub async fn render<P>(&self, location: &P, pathname: Option<&str>) -> Result<ViewName, RouterError>
	where
		P: LocationProvider + ?Sized,
	{
		let pathname = match pathname {
			Some(pathname) => pathname.to_string(),
			None => CurrentLocation::read(location)?.pathname().to_string(),
		};
		self.render_path(&pathname).await
	}
}
