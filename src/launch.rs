//! Startup wiring
//!
//! Builds the router and, with the `report` feature, the error reporter and
//! session refresher from [`WaymarkSettings`]. The builders are target
//! independent; [`launch`] (WASM only) runs them against the live page and
//! installs the listeners.

use crate::conf::{SettingsError, WaymarkSettings};
use waymark_router::{LocationProvider, RouterError, SpaRouter, ViewLoader, ViewRenderer};
use waymark_router::view::LoadedView;

#[cfg(feature = "report")]
use crate::conf::{Credentials, resolve_url};
#[cfg(feature = "report")]
use std::time::Duration;
#[cfg(feature = "report")]
use url::Url;
#[cfg(feature = "report")]
use waymark_report::{
	CredentialsMode, ErrorReporter, Navigator, RefreshRequest, ReportEndpoints, ReportError,
	ReportTransport, SessionError, SessionRefresher, SessionTransport,
};

/// Startup failure
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
	#[error(transparent)]
	Settings(#[from] SettingsError),

	#[error(transparent)]
	Router(#[from] RouterError),

	#[cfg(feature = "report")]
	#[error(transparent)]
	Report(#[from] ReportError),

	#[cfg(feature = "report")]
	#[error(transparent)]
	Session(#[from] SessionError),
}

/// Creates the router for the configured paths.
pub fn build_router<P, L, R>(
	settings: &WaymarkSettings,
	location: P,
	loader: L,
	renderer: R,
) -> Result<SpaRouter<P, L, R>, LaunchError>
where
	P: LocationProvider,
	L: ViewLoader,
	R: ViewRenderer<LoadedView<L>>,
{
	Ok(SpaRouter::with_paths(
		settings.router.paths.iter().cloned(),
		location,
		loader,
		renderer,
	)?)
}

/// Creates the error reporter, or `None` when reporting is disabled.
#[cfg(feature = "report")]
pub fn build_reporter<T>(
	settings: &WaymarkSettings,
	base: &Url,
	transport: T,
) -> Result<Option<ErrorReporter<T>>, LaunchError>
where
	T: ReportTransport,
{
	let report = &settings.report;
	if !report.enabled {
		return Ok(None);
	}
	let endpoints = ReportEndpoints::resolve(base, &report.error_endpoint, &report.rejection_endpoint)?;
	Ok(Some(ErrorReporter::new(transport, endpoints)))
}

#[cfg(feature = "report")]
fn credentials_mode(credentials: Credentials) -> CredentialsMode {
	match credentials {
		Credentials::Omit => CredentialsMode::Omit,
		Credentials::SameOrigin => CredentialsMode::SameOrigin,
		Credentials::Include => CredentialsMode::Include,
	}
}

/// Creates the session refresher, or `None` without a `[session]` section.
#[cfg(feature = "report")]
pub fn build_session<T, N>(
	settings: &WaymarkSettings,
	base: &Url,
	transport: T,
	navigator: N,
) -> Result<Option<SessionRefresher<T, N>>, LaunchError>
where
	T: SessionTransport,
	N: Navigator,
{
	let Some(session) = &settings.session else {
		return Ok(None);
	};

	let refresh_url = resolve_url(base, "session.refresh_url", &session.refresh_url)?;
	let redirect_url = resolve_url(base, "session.redirect_url", &session.redirect_url)?;
	let mut request = RefreshRequest::post(refresh_url)
		.with_method(&session.method)?
		.with_credentials(credentials_mode(session.credentials));
	for (name, value) in &session.headers {
		request = request.with_header(name.as_str(), value.as_str());
	}

	Ok(Some(
		SessionRefresher::new(transport, navigator, request, redirect_url)
			.with_interval(Duration::from_millis(session.interval_ms)),
	))
}

#[cfg(wasm)]
pub use browser::{Launched, launch};

#[cfg(wasm)]
mod browser {
	use super::*;
	use std::rc::Rc;
	use waymark_core::info_log;
	use waymark_router::CurrentLocation;
	use waymark_router::web::{NavigationListeners, WindowLocation, install};

	#[cfg(feature = "report")]
	use waymark_report::HttpTransport;
	#[cfg(feature = "report")]
	use waymark_report::web::{ErrorListeners, WindowNavigator, failure_hook, install_error_listeners};

	/// Listeners installed by [`launch`].
	#[derive(Debug)]
	pub struct Launched {
		navigation: NavigationListeners,
		#[cfg(feature = "report")]
		errors: Option<ErrorListeners>,
	}

	impl Launched {
		/// Keeps everything installed for the lifetime of the page.
		pub fn forget(self) {
			#[cfg(feature = "report")]
			if let Some(errors) = self.errors {
				errors.forget();
			}
			self.navigation.forget();
		}
	}

	/// Starts client-side navigation on the current page.
	///
	/// Validates `settings` against the page address, installs the router
	/// listeners and, with the `report` feature, the error listeners and the
	/// session refresh loop.
	pub fn launch<L, R>(settings: &WaymarkSettings, loader: L, renderer: R) -> Result<Launched, LaunchError>
	where
		L: ViewLoader + 'static,
		R: ViewRenderer<LoadedView<L>> + 'static,
	{
		let location = WindowLocation::new();
		let base = CurrentLocation::read(&location)?.url().clone();
		settings.validate(&base)?;
		let router = Rc::new(build_router(settings, location, loader, renderer)?);
		info_log!("waymark: {} in-app paths", router.registry().len());
		install_all(settings, &base, router)
	}

	#[cfg(feature = "report")]
	fn install_all<L, R>(
		settings: &WaymarkSettings,
		base: &Url,
		router: Rc<SpaRouter<WindowLocation, L, R>>,
	) -> Result<Launched, LaunchError>
	where
		L: ViewLoader + 'static,
		R: ViewRenderer<LoadedView<L>> + 'static,
	{
		let transport = HttpTransport::new();
		let reporter = build_reporter(settings, base, transport.clone())?.map(Rc::new);
		let errors = reporter
			.as_ref()
			.map(|reporter| install_error_listeners(Rc::clone(reporter)))
			.transpose()?;
		let navigation = install(router, reporter.map(failure_hook))?;
		if let Some(session) = build_session(settings, base, transport, WindowNavigator::new())? {
			session.spawn();
		}
		Ok(Launched { navigation, errors })
	}

	#[cfg(not(feature = "report"))]
	fn install_all<L, R>(
		settings: &WaymarkSettings,
		_base: &url::Url,
		router: Rc<SpaRouter<WindowLocation, L, R>>,
	) -> Result<Launched, LaunchError>
	where
		L: ViewLoader + 'static,
		R: ViewRenderer<LoadedView<L>> + 'static,
	{
		if settings.session.is_some() {
			waymark_core::warn_log!("waymark: [session] ignored without the `report` feature");
		}
		let navigation = install(router, None)?;
		Ok(Launched { navigation })
	}
}
