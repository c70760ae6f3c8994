//! Application settings
//!
//! Settings are usually embedded in the WASM bundle with `include_str!` and
//! parsed at startup:
//!
//! ```toml
//! [router]
//! paths = ["/", "/about", "/contact-us"]
//!
//! [report]
//! enabled = true
//! error_endpoint = "/api/report/error"
//! rejection_endpoint = "/api/report/unhandled-rejection"
//!
//! [session]
//! refresh_url = "/api/session/refresh"
//! redirect_url = "/login"
//! interval_ms = 3600000
//! method = "POST"
//! ```
//!
//! `[report]` falls back to the defaults shown above. Without a `[session]`
//! section no refresh loop is started.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

#[cfg(feature = "report")]
use waymark_report::report::{DEFAULT_ERROR_ENDPOINT, DEFAULT_REJECTION_ENDPOINT};

#[cfg(feature = "report")]
const DEFAULT_INTERVAL_MS: u64 = waymark_report::session::DEFAULT_INTERVAL.as_millis() as u64;

// Without the collaborators the values are only parsed, never used.
#[cfg(not(feature = "report"))]
const DEFAULT_ERROR_ENDPOINT: &str = "/api/report/error";
#[cfg(not(feature = "report"))]
const DEFAULT_REJECTION_ENDPOINT: &str = "/api/report/unhandled-rejection";
#[cfg(not(feature = "report"))]
const DEFAULT_INTERVAL_MS: u64 = 3_600_000;

/// Main application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaymarkSettings {
	/// In-app paths
	pub router: RouterSettings,

	/// Error reporting
	#[serde(default)]
	pub report: ReportSettings,

	/// Session refresh, disabled when absent
	#[serde(default)]
	pub session: Option<SessionSettings>,
}

/// `[router]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterSettings {
	/// Pathnames handled client-side; the first one is the root view.
	pub paths: Vec<String>,
}

/// `[report]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
	#[serde(default = "default_true")]
	pub enabled: bool,

	#[serde(default = "default_error_endpoint")]
	pub error_endpoint: String,

	#[serde(default = "default_rejection_endpoint")]
	pub rejection_endpoint: String,
}

impl Default for ReportSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			error_endpoint: DEFAULT_ERROR_ENDPOINT.to_string(),
			rejection_endpoint: DEFAULT_REJECTION_ENDPOINT.to_string(),
		}
	}
}

/// Credentials mode of the refresh request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Credentials {
	Omit,
	#[default]
	SameOrigin,
	Include,
}

/// `[session]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
	pub refresh_url: String,

	/// Login page; receives the current address in its `redirect` parameter.
	pub redirect_url: String,

	#[serde(default = "default_interval_ms")]
	pub interval_ms: u64,

	#[serde(default = "default_method")]
	pub method: String,

	#[serde(default)]
	pub headers: BTreeMap<String, String>,

	#[serde(default)]
	pub credentials: Credentials,
}

fn default_true() -> bool {
	true
}

fn default_error_endpoint() -> String {
	DEFAULT_ERROR_ENDPOINT.to_string()
}

fn default_rejection_endpoint() -> String {
	DEFAULT_REJECTION_ENDPOINT.to_string()
}

fn default_interval_ms() -> u64 {
	DEFAULT_INTERVAL_MS
}

fn default_method() -> String {
	"POST".to_string()
}

/// Settings error
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Invalid URL for {key} '{value}': {source}")]
	InvalidUrl {
		key: &'static str,
		value: String,
		#[source]
		source: url::ParseError,
	},
}

/// Resolves a possibly relative URL setting against the page address.
pub fn resolve_url(base: &Url, key: &'static str, value: &str) -> Result<Url, SettingsError> {
	base.join(value).map_err(|source| SettingsError::InvalidUrl {
		key,
		value: value.to_string(),
		source,
	})
}

fn is_token_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

impl WaymarkSettings {
	/// Settings with the given paths and defaults everywhere else.
	pub fn with_paths<I, S>(paths: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			router: RouterSettings {
				paths: paths.into_iter().map(Into::into).collect(),
			},
			report: ReportSettings::default(),
			session: None,
		}
	}

	/// Parses TOML settings.
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		toml::from_str(contents).map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))
	}

	/// Parses JSON settings.
	pub fn from_json_str(contents: &str) -> Result<Self, SettingsError> {
		serde_json::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))
	}

	/// Checks the settings against the page they will run on.
	///
	/// Relative URLs are resolved against `base`.
	pub fn validate(&self, base: &Url) -> Result<(), SettingsError> {
		if self.router.paths.is_empty() {
			return Err(SettingsError::ValidationError(
				"router.paths must contain at least the root path".to_string(),
			));
		}
		if let Some(path) = self.router.paths.iter().find(|path| !path.starts_with('/')) {
			return Err(SettingsError::ValidationError(format!(
				"router.paths entry '{}' must start with '/'",
				path
			)));
		}

		if self.report.enabled {
			resolve_url(base, "report.error_endpoint", &self.report.error_endpoint)?;
			resolve_url(base, "report.rejection_endpoint", &self.report.rejection_endpoint)?;
		}

		if let Some(session) = &self.session {
			resolve_url(base, "session.refresh_url", &session.refresh_url)?;
			resolve_url(base, "session.redirect_url", &session.redirect_url)?;
			if session.interval_ms == 0 {
				return Err(SettingsError::ValidationError(
					"session.interval_ms must be greater than zero".to_string(),
				));
			}
			if session.method.is_empty() || !session.method.chars().all(is_token_char) {
				return Err(SettingsError::ValidationError(format!(
					"session.method '{}' is not a valid HTTP method",
					session.method
				)));
			}
		}

		Ok(())
	}
}
