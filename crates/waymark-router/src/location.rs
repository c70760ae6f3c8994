//! Address bar state.
//!
//! [`CurrentLocation`] is a parsed, read-only view of the live address bar.
//! It is rebuilt from the [`LocationProvider`] every time it is needed and is
//! never stored by the router.

use crate::error::RouterError;
use crate::platform::LocationProvider;
use url::Url;

/// Parsed address bar state at the moment it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLocation {
	url: Url,
}

impl CurrentLocation {
	/// Reads the current location from `provider`.
	pub fn read<L: LocationProvider + ?Sized>(provider: &L) -> Result<Self, RouterError> {
		Self::parse(&provider.href()?)
	}

	/// Parses an absolute URL.
	pub fn parse(href: &str) -> Result<Self, RouterError> {
		Url::parse(href)
			.map(|url| Self { url })
			.map_err(|err| RouterError::invalid_url(href, err))
	}

	/// The underlying URL.
	pub fn url(&self) -> &Url {
		&self.url
	}

	/// `location.pathname`.
	pub fn pathname(&self) -> &str {
		self.url.path()
	}

	/// `location.search`.
	pub fn search(&self) -> String {
		search_of(&self.url)
	}

	/// `location.hash`.
	pub fn hash(&self) -> String {
		hash_of(&self.url)
	}

	/// `location.origin`.
	pub fn origin(&self) -> String {
		self.url.origin().ascii_serialization()
	}

	/// Pathname followed by search.
	pub fn path_and_search(&self) -> String {
		format!("{}{}", self.pathname(), self.search())
	}

	/// Pathname, search and hash.
	pub fn relative_reference(&self) -> String {
		relative_reference(&self.url)
	}

	/// Resolves a link destination against this location.
	///
	/// Returns `None` for values that do not form a valid URL.
	pub fn resolve(&self, href: &str) -> Option<Url> {
		self.url.join(href).ok()
	}
}

/// `URL.search`: `?` plus the query, or empty when the query is absent or empty.
pub fn search_of(url: &Url) -> String {
	match url.query() {
		Some(query) if !query.is_empty() => format!("?{query}"),
		_ => String::new(),
	}
}

/// `URL.hash`: `#` plus the fragment, or empty when the fragment is absent or empty.
pub fn hash_of(url: &Url) -> String {
	match url.fragment() {
		Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
		_ => String::new(),
	}
}

/// Pathname, search and hash of `url`.
pub fn relative_reference(url: &Url) -> String {
	format!("{}{}{}", url.path(), search_of(url), hash_of(url))
}
