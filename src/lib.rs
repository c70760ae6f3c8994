//! # Waymark
//!
//! Client-side navigation for single-page applications: in-app link clicks
//! are intercepted, the address bar is kept in sync through the History API
//! and the matching view is loaded and rendered, without full page reloads.
//!
//! ## Crates
//!
//! - [`waymark_router`]: the routing engine ([`SpaRouter`])
//! - [`waymark_core`]: logging macros and background tasks
//! - `waymark_report` (feature `report`, default): error reporting and session
//!   refresh
//!
//! ## Feature Flags
//!
//! - `report` (default) - error reporting and session refresh collaborators
//! - `debug-navigation` - log every click decision (debug builds only)
//!
//! ## Quick Start
//!
//! ```ignore
//! use waymark::conf::WaymarkSettings;
//! use waymark::{ViewFactory, ViewName};
//!
//! async fn load(name: ViewName) -> Result<ViewFactory<String>, String> {
//!     Ok(ViewFactory::new(move || format!("<h1>{name}</h1>")))
//! }
//!
//! let settings = WaymarkSettings::from_toml_str(include_str!("waymark.toml"))?;
//! waymark::launch(&settings, load, |html: String| set_main_html(&html))?.forget();
//! ```

pub mod conf;
pub mod launch;

pub use waymark_core;
#[cfg(feature = "report")]
pub use waymark_report;
pub use waymark_router;

pub use conf::{SettingsError, WaymarkSettings};
pub use launch::{LaunchError, build_router};
#[cfg(feature = "report")]
pub use launch::{build_reporter, build_session};
#[cfg(wasm)]
pub use launch::{Launched, launch};

pub use waymark_router::{
	BoxError, ClickOutcome, PathRegistry, RouterError, SpaRouter, SyncOutcome, ViewFactory,
	ViewLoader, ViewModule, ViewName, ViewRenderer,
};
