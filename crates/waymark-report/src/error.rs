//! Error types for reporting and session refresh.

use thiserror::Error;

/// Failures while sending an error report.
#[derive(Debug, Error)]
pub enum ReportError {
	/// An endpoint could not be resolved to an absolute URL.
	#[error("Invalid report endpoint '{endpoint}': {source}")]
	InvalidEndpoint {
		/// The configured endpoint.
		endpoint: String,
		/// Parse failure.
		#[source]
		source: url::ParseError,
	},

	/// The report body could not be serialized.
	#[error("Failed to serialize report: {0}")]
	Serialize(#[from] serde_json::Error),

	/// The request did not complete.
	#[error("Report request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// A browser API needed to install the reporting listeners is missing.
	#[error("Error reporting unavailable: {0}")]
	Unavailable(String),
}

impl From<waymark_router::RouterError> for ReportError {
	fn from(err: waymark_router::RouterError) -> Self {
		match err {
			waymark_router::RouterError::Unavailable(api) => Self::Unavailable(api),
			other => Self::Unavailable(other.to_string()),
		}
	}
}

/// Failures of the session refresh loop.
#[derive(Debug, Error)]
pub enum SessionError {
	/// The refresh or redirect URL could not be resolved.
	#[error("Invalid session URL '{url}': {source}")]
	InvalidUrl {
		/// The configured URL.
		url: String,
		/// Parse failure.
		#[source]
		source: url::ParseError,
	},

	/// The configured HTTP method is not a valid token.
	#[error("Invalid session refresh method '{0}'")]
	InvalidMethod(String),

	/// The refresh request did not complete.
	#[error("Session refresh request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The refresh endpoint answered with a non-success status other than 401.
	#[error("The session refresh responded with an erroneous status code: {0}")]
	Status(u16),

	/// Reading or assigning the page location failed.
	#[error("Navigation failed: {0}")]
	Navigation(String),
}
