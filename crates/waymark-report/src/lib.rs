//! Waymark Report - error reporting and session refresh
//!
//! Two background collaborators of a waymark single-page application:
//!
//! - [`report`]: posts uncaught errors and unhandled rejections to the backend
//! - [`session`]: refreshes the session periodically and sends the page to
//!   login once it has expired
//! - [`transport`]: the `reqwest` implementation of both transports
//! - `web` (WASM only): page listeners and `window.location`
//!
//! ## Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use waymark_report::{ErrorReporter, HttpTransport, ReportEndpoints};
//! use waymark_report::web::install_error_listeners;
//!
//! let page = url::Url::parse(&href)?;
//! let reporter = Rc::new(ErrorReporter::new(
//!     HttpTransport::new(),
//!     ReportEndpoints::with_defaults(&page)?,
//! ));
//! install_error_listeners(reporter)?.forget();
//! ```

pub mod error;
pub mod report;
pub mod session;
pub mod transport;

#[cfg(wasm)]
pub mod web;

pub use error::{ReportError, SessionError};
pub use report::{BaseErrorBody, ErrorBody, ErrorDetails, ErrorReporter, ReportEndpoints, ReportTransport};
pub use session::{
	CredentialsMode, Navigator, RefreshOutcome, RefreshRequest, SessionRefresher, SessionTransport,
	build_redirect_url,
};
pub use transport::HttpTransport;
