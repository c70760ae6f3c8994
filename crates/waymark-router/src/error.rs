//! Router error type.

use std::error::Error as StdError;

/// Boxed error returned by host view loaders.
pub type BoxError = Box<dyn StdError + 'static>;

/// Error type for router operations.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
	/// The router was set up with an unusable configuration.
	#[error("Invalid router configuration: {0}")]
	Configuration(String),

	/// A URL could not be parsed or resolved.
	#[error("Invalid URL '{url}': {reason}")]
	InvalidUrl {
		/// The offending input.
		url: String,
		/// Parser message.
		reason: String,
	},

	/// The browser rejected a history mutation.
	#[error("History update failed: {0}")]
	History(String),

	/// The host loader failed to provide a view.
	#[error("Failed to load view '{view}': {source}")]
	ViewLoad {
		/// Name of the view that was requested.
		view: String,
		/// Loader error.
		#[source]
		source: BoxError,
	},

	/// A browser API required by the router is unavailable.
	#[error("Browser API unavailable: {0}")]
	Unavailable(String),
}

impl RouterError {
	pub(crate) fn invalid_url(url: impl Into<String>, err: url::ParseError) -> Self {
		Self::InvalidUrl {
			url: url.into(),
			reason: err.to_string(),
		}
	}
}
