//! Session refresh polling.
//!
//! [`SessionRefresher`] calls a refresh endpoint right away and then once per
//! interval. A `401` sends the page to the login URL, carrying the current
//! address in the `redirect` query parameter, and ends the loop. Any other
//! non-success status ends the loop with [`SessionError::Status`].

use crate::error::SessionError;
use std::time::Duration;
use url::Url;
use waymark_core::{MaybeSend, MaybeSync, TaskFuture, info_log, spawn_logged, timer};

/// Default interval between refreshes: one hour.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3_600_000);

/// Query parameter carrying the page to return to after login.
pub const REDIRECT_PARAM: &str = "redirect";

const UNAUTHORIZED: u16 = 401;

/// Fetch credentials mode of the refresh request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialsMode {
	/// Never send cookies.
	Omit,
	/// Send cookies to the same origin only.
	#[default]
	SameOrigin,
	/// Always send cookies.
	Include,
}

/// The refresh request.
#[derive(Debug, Clone)]
pub struct RefreshRequest {
	pub url: Url,
	pub method: reqwest::Method,
	pub headers: Vec<(String, String)>,
	pub credentials: CredentialsMode,
}

impl RefreshRequest {
	/// A `POST` to `url` with no extra headers.
	pub fn post(url: Url) -> Self {
		Self {
			url,
			method: reqwest::Method::POST,
			headers: Vec::new(),
			credentials: CredentialsMode::default(),
		}
	}

	/// Replaces the method, parsed from its name.
	pub fn with_method(mut self, method: &str) -> Result<Self, SessionError> {
		self.method = reqwest::Method::from_bytes(method.as_bytes())
			.map_err(|_| SessionError::InvalidMethod(method.to_string()))?;
		Ok(self)
	}

	/// Adds a request header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	pub fn with_credentials(mut self, credentials: CredentialsMode) -> Self {
		self.credentials = credentials;
		self
	}
}

/// Performs the refresh request.
pub trait SessionTransport {
	/// Sends `request` and resolves to the response status.
	fn refresh(&self, request: &RefreshRequest) -> TaskFuture<'static, Result<u16, SessionError>>;
}

/// Reads and replaces the page location.
pub trait Navigator {
	/// The current page address.
	fn current_href(&self) -> Result<String, SessionError>;

	/// Navigates the page to `href`.
	fn assign(&self, href: &str) -> Result<(), SessionError>;
}

/// Result of one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
	/// The session was extended.
	Refreshed,
	/// The session is gone; the page was sent to `redirect`.
	Expired { redirect: Url },
}

/// Copy of `redirect_url` whose `redirect` parameter is `current_href`.
///
/// An existing `redirect` parameter is replaced in place and any repeats are
/// dropped; other parameters keep their order.
pub fn build_redirect_url(redirect_url: &Url, current_href: &str) -> Url {
	let mut replaced = false;
	let mut pairs: Vec<(String, String)> = Vec::new();
	for (name, value) in redirect_url.query_pairs() {
		if name == REDIRECT_PARAM {
			if !replaced {
				pairs.push((name.into_owned(), current_href.to_string()));
				replaced = true;
			}
		} else {
			pairs.push((name.into_owned(), value.into_owned()));
		}
	}
	if !replaced {
		pairs.push((REDIRECT_PARAM.to_string(), current_href.to_string()));
	}

	let mut url = redirect_url.clone();
	url.query_pairs_mut().clear().extend_pairs(pairs);
	url
}

/// Keeps the session alive and redirects to login once it has expired.
#[derive(Debug)]
pub struct SessionRefresher<T, N> {
	transport: T,
	navigator: N,
	request: RefreshRequest,
	redirect_url: Url,
	interval: Duration,
}

impl<T, N> SessionRefresher<T, N>
where
	T: SessionTransport,
	N: Navigator,
{
	pub fn new(transport: T, navigator: N, request: RefreshRequest, redirect_url: Url) -> Self {
		Self {
			transport,
			navigator,
			request,
			redirect_url,
			interval: DEFAULT_INTERVAL,
		}
	}

	/// Sets the delay between refreshes.
	pub fn with_interval(mut self, interval: Duration) -> Self {
		self.interval = interval;
		self
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	pub fn request(&self) -> &RefreshRequest {
		&self.request
	}

	/// Performs one refresh.
	pub async fn refresh_once(&self) -> Result<RefreshOutcome, SessionError> {
		let status = self.transport.refresh(&self.request).await?;
		if status == UNAUTHORIZED {
			let redirect = build_redirect_url(&self.redirect_url, &self.navigator.current_href()?);
			info_log!("session expired, redirecting to {}", redirect);
			self.navigator.assign(redirect.as_str())?;
			return Ok(RefreshOutcome::Expired { redirect });
		}
		if !(200..300).contains(&status) {
			return Err(SessionError::Status(status));
		}
		Ok(RefreshOutcome::Refreshed)
	}

	/// Refreshes now and after every interval until the session expires or a
	/// refresh fails.
	pub async fn run(self) -> Result<(), SessionError> {
		loop {
			match self.refresh_once().await? {
				RefreshOutcome::Refreshed => timer::sleep(self.interval).await,
				RefreshOutcome::Expired { .. } => return Ok(()),
			}
		}
	}
}

impl<T, N> SessionRefresher<T, N>
where
	T: SessionTransport + MaybeSend + MaybeSync + 'static,
	N: Navigator + MaybeSend + MaybeSync + 'static,
{
	/// Runs the loop in the background; a failure is logged.
	pub fn spawn(self) {
		spawn_logged("session refresh stopped", self.run());
	}
}
