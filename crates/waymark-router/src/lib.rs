//! Waymark Router - client-side navigation for single-page applications
//!
//! Intercepts in-app link clicks, keeps the address bar in sync through the
//! History API and asks the host application to render the matching view,
//! without full page reloads.
//!
//! ## Architecture
//!
//! - [`registry`]: the fixed list of in-app pathnames and the view name mapping
//! - [`resolve`]: finds the clicked anchor, across shadow-DOM boundaries
//! - [`policy`]: intercept or leave the click to the browser
//! - [`history`]: pushes history entries and resets scroll
//! - [`view`]: loads and renders views
//! - [`router`]: [`SpaRouter`], the click / popstate / document-ready entry points
//! - [`platform`]: the traits the engine is written against
//! - `web` (WASM only): `web-sys` implementations and listener installation
//! - [`testing`]: an in-memory browser for tests
//!
//! ## Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use waymark_router::{SpaRouter, ViewFactory, ViewName};
//! use waymark_router::web::{WindowLocation, install};
//!
//! async fn load(name: ViewName) -> Result<ViewFactory<String>, String> {
//!     Ok(ViewFactory::new(move || format!("<h1>{name}</h1>")))
//! }
//!
//! let router = SpaRouter::with_paths(
//!     ["/", "/about", "/contact-us"],
//!     WindowLocation::new(),
//!     load,
//!     |html: String| set_main_html(&html),
//! )?;
//! install(Rc::new(router), None)?.forget();
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod history;
pub mod location;
pub mod platform;
pub mod policy;
pub mod registry;
pub mod resolve;
pub mod router;
pub mod view;

// Testing utilities (available on both WASM and native)
pub mod testing;

#[cfg(wasm)]
pub mod web;

pub use error::{BoxError, RouterError};
pub use history::SyncOutcome;
pub use location::CurrentLocation;
pub use platform::{AnchorElement, ClickEvent, DomNode, LocationProvider, Modifiers, PathEntry};
pub use policy::{NavigationDecision, NavigationPolicy, PassthroughReason};
pub use registry::{PathRegistry, ViewName};
pub use router::{ClickOutcome, SpaRouter};
pub use view::{DefaultView, ViewFactory, ViewLoader, ViewModule, ViewRenderer, ViewResolver};
