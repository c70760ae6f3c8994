//! `reqwest` transport for reports and session refresh.
//!
//! In the browser `reqwest` goes through `fetch`, so cookies and the page
//! origin apply as they would for a script-issued request.

use crate::error::{ReportError, SessionError};
use crate::report::ReportTransport;
use crate::session::{RefreshRequest, SessionTransport};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;
use waymark_core::TaskFuture;

/// HTTP transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Uses an existing client.
	pub fn with_client(client: Client) -> Self {
		Self { client }
	}
}

impl ReportTransport for HttpTransport {
	fn post_json(&self, endpoint: &Url, body: serde_json::Value) -> TaskFuture<'static, Result<(), ReportError>> {
		let request = self
			.client
			.post(endpoint.clone())
			.header(CONTENT_TYPE, "application/json")
			.json(&body);
		Box::pin(async move {
			request.send().await?;
			Ok(())
		})
	}
}

impl SessionTransport for HttpTransport {
	fn refresh(&self, request: &RefreshRequest) -> TaskFuture<'static, Result<u16, SessionError>> {
		let mut builder = self
			.client
			.request(request.method.clone(), request.url.clone());
		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}
		#[cfg(wasm)]
		{
			use crate::session::CredentialsMode;
			builder = match request.credentials {
				CredentialsMode::Omit => builder.fetch_credentials_omit(),
				CredentialsMode::SameOrigin => builder.fetch_credentials_same_origin(),
				CredentialsMode::Include => builder.fetch_credentials_include(),
			};
		}
		Box::pin(async move {
			let response = builder.send().await?;
			Ok(response.status().as_u16())
		})
	}
}
