//! Error reporting.
//!
//! Uncaught errors and unhandled promise rejections are posted as JSON to
//! backend endpoints. Sending is fire-and-forget: a report that fails to send
//! is logged and dropped.
//!
//! | Event                | Endpoint                          | Body            |
//! |----------------------|-----------------------------------|-----------------|
//! | `error`              | `/api/report/error`               | [`ErrorBody`]   |
//! | `unhandledrejection` | `/api/report/unhandled-rejection` | [`BaseErrorBody`] |

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use url::Url;
use waymark_core::{TaskFuture, error_log, spawn_logged};

/// Default endpoint for uncaught errors.
pub const DEFAULT_ERROR_ENDPOINT: &str = "/api/report/error";

/// Default endpoint for unhandled rejections.
pub const DEFAULT_REJECTION_ENDPOINT: &str = "/api/report/unhandled-rejection";

/// Fields read from a thrown value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cause: Option<serde_json::Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stack: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub code: Option<i64>,
}

/// Body posted for an unhandled rejection, and the common part of [`ErrorBody`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseErrorBody {
	/// Constructor name of the thrown value, or its `typeof`.
	#[serde(rename = "type")]
	pub kind: String,
	/// JSON serialization of the thrown value, when it has any fields.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub raw: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<ErrorDetails>,
}

impl BaseErrorBody {
	/// Describes a Rust error.
	///
	/// The type is the error's type name without its module path; the first
	/// source, if any, becomes the cause.
	pub fn from_error<E>(err: &E) -> Self
	where
		E: StdError + ?Sized + 'static,
	{
		let kind = short_type_name::<E>().to_string();
		Self {
			error: Some(ErrorDetails {
				message: Some(err.to_string()),
				cause: err
					.source()
					.map(|source| serde_json::Value::String(source.to_string())),
				stack: None,
				name: Some(kind.clone()),
				code: None,
			}),
			kind,
			raw: None,
		}
	}
}

/// Body posted for an uncaught error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
	pub colno: u32,
	pub filename: String,
	pub lineno: u32,
	pub message: String,
	#[serde(flatten)]
	pub base: BaseErrorBody,
}

fn short_type_name<E: ?Sized>() -> &'static str {
	let full = std::any::type_name::<E>();
	let base = full.split('<').next().unwrap_or(full);
	base.rsplit("::").next().unwrap_or(base)
}

/// Report and rejection endpoints, resolved to absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEndpoints {
	pub error: Url,
	pub rejection: Url,
}

impl ReportEndpoints {
	/// Resolves `error` and `rejection` against `base`.
	pub fn resolve(base: &Url, error: &str, rejection: &str) -> Result<Self, ReportError> {
		let join = |endpoint: &str| {
			base.join(endpoint).map_err(|source| ReportError::InvalidEndpoint {
				endpoint: endpoint.to_string(),
				source,
			})
		};
		Ok(Self {
			error: join(error)?,
			rejection: join(rejection)?,
		})
	}

	/// The default endpoints on the origin of `base`.
	pub fn with_defaults(base: &Url) -> Result<Self, ReportError> {
		Self::resolve(base, DEFAULT_ERROR_ENDPOINT, DEFAULT_REJECTION_ENDPOINT)
	}
}

/// Sends a JSON body to an endpoint.
pub trait ReportTransport {
	/// Posts `body` to `endpoint` with `Content-Type: application/json`.
	///
	/// Resolves once the request has completed, whatever the status.
	fn post_json(&self, endpoint: &Url, body: serde_json::Value) -> TaskFuture<'static, Result<(), ReportError>>;
}

/// Posts error reports.
#[derive(Debug, Clone)]
pub struct ErrorReporter<T> {
	transport: T,
	endpoints: ReportEndpoints,
}

impl<T: ReportTransport> ErrorReporter<T> {
	pub fn new(transport: T, endpoints: ReportEndpoints) -> Self {
		Self {
			transport,
			endpoints,
		}
	}

	pub fn endpoints(&self) -> &ReportEndpoints {
		&self.endpoints
	}

	/// Sends an uncaught-error report and waits for it.
	pub async fn send_error(&self, body: &ErrorBody) -> Result<(), ReportError> {
		let payload = serde_json::to_value(body)?;
		self.transport.post_json(&self.endpoints.error, payload).await
	}

	/// Sends an unhandled-rejection report and waits for it.
	pub async fn send_rejection(&self, body: &BaseErrorBody) -> Result<(), ReportError> {
		let payload = serde_json::to_value(body)?;
		self.transport.post_json(&self.endpoints.rejection, payload).await
	}

	/// Sends an uncaught-error report in the background.
	pub fn dispatch_error(&self, body: &ErrorBody) {
		self.dispatch(
			"An error occurred when reporting an error",
			&self.endpoints.error,
			body,
		);
	}

	/// Sends an unhandled-rejection report in the background.
	pub fn dispatch_rejection(&self, body: &BaseErrorBody) {
		self.dispatch(
			"An error occurred when reporting an unhandled rejection",
			&self.endpoints.rejection,
			body,
		);
	}

	/// Reports a Rust error nobody handled as an unhandled rejection.
	pub fn report_unhandled<E>(&self, err: &E)
	where
		E: StdError + ?Sized + 'static,
	{
		self.dispatch_rejection(&BaseErrorBody::from_error(err));
	}

	fn dispatch<B: Serialize>(&self, label: &'static str, endpoint: &Url, body: &B) {
		match serde_json::to_value(body) {
			Ok(payload) => spawn_logged(label, self.transport.post_json(endpoint, payload)),
			Err(err) => error_log!("{}: {}", label, err),
		}
	}
}
