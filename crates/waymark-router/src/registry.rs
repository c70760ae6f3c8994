//! Path registry and view names.
//!
//! The registry is the fixed, ordered list of pathnames the application
//! renders client-side. Its first entry is the root path, whose view is always
//! named `root`.

use crate::error::RouterError;
use std::fmt;

/// View name used for the root path.
pub const ROOT_VIEW: &str = "root";

/// Identifier of a logical view, derived from a pathname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewName(String);

impl ViewName {
	/// Derives the view name of a non-root pathname.
	///
	/// Empty segments are dropped, the rest joined with `_`, and `-` replaced
	/// with `_`: `/blog/my-post/` becomes `blog_my_post`.
	pub fn from_path(path: &str) -> Self {
		let name = path
			.split('/')
			.filter(|segment| !segment.is_empty())
			.collect::<Vec<_>>()
			.join("_")
			.replace('-', "_");
		Self(name)
	}

	/// The view name of the root path.
	pub fn root() -> Self {
		Self(ROOT_VIEW.to_string())
	}

	/// Returns the name as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the name and returns the inner string.
	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for ViewName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for ViewName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// Ordered set of in-app pathnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRegistry {
	paths: Vec<String>,
}

impl PathRegistry {
	/// Creates a registry; the first path becomes the root path.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Configuration`] if `paths` is empty.
	pub fn new<I, S>(paths: I) -> Result<Self, RouterError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
		if paths.is_empty() {
			return Err(RouterError::Configuration("No root path".to_string()));
		}
		Ok(Self { paths })
	}

	/// The root path.
	pub fn root(&self) -> &str {
		&self.paths[0]
	}

	/// Whether `pathname` is an in-app route.
	pub fn contains(&self, pathname: &str) -> bool {
		self.paths.iter().any(|path| path == pathname)
	}

	/// Maps a pathname to its view name.
	pub fn view_name(&self, pathname: &str) -> ViewName {
		if pathname == self.root() {
			ViewName::root()
		} else {
			ViewName::from_path(pathname)
		}
	}

	/// Iterates over the registered paths in order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.paths.iter().map(String::as_str)
	}

	/// Number of registered paths.
	pub fn len(&self) -> usize {
		self.paths.len()
	}

	/// Always false; a registry holds at least the root path.
	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn registry() -> PathRegistry {
		PathRegistry::new(["/", "/about", "/contact-us", "/docs/getting-started/"]).unwrap()
	}

	#[test]
	fn test_empty_registry_is_rejected() {
		let result = PathRegistry::new(Vec::<String>::new());
		assert!(matches!(result, Err(RouterError::Configuration(_))));
	}

	#[rstest]
	fn test_root_is_first_path(registry: PathRegistry) {
		assert_eq!(registry.root(), "/");
		assert_eq!(registry.len(), 4);
		assert!(!registry.is_empty());
	}

	#[rstest]
	#[case("/", true)]
	#[case("/about", true)]
	#[case("/about/", false)]
	#[case("/contact-us", true)]
	#[case("/admin", false)]
	fn test_contains_is_exact(registry: PathRegistry, #[case] path: &str, #[case] expected: bool) {
		assert_eq!(registry.contains(path), expected);
	}

	#[rstest]
	#[case("/", "root")]
	#[case("/about", "about")]
	#[case("/contact-us", "contact_us")]
	#[case("/docs/getting-started/", "docs_getting_started")]
	fn test_view_names(registry: PathRegistry, #[case] path: &str, #[case] expected: &str) {
		assert_eq!(registry.view_name(path).as_str(), expected);
	}

	#[test]
	fn test_non_slash_root_maps_to_root() {
		let registry = PathRegistry::new(["/app/home", "/app/settings"]).unwrap();
		assert_eq!(registry.view_name("/app/home").as_str(), ROOT_VIEW);
		assert_eq!(registry.view_name("/app/settings").as_str(), "app_settings");
		// A bare slash is not the root here and has no segments.
		assert_eq!(registry.view_name("/").as_str(), "");
	}

	#[rstest]
	fn test_iter_preserves_order(registry: PathRegistry) {
		let paths: Vec<&str> = registry.iter().collect();
		assert_eq!(
			paths,
			vec!["/", "/about", "/contact-us", "/docs/getting-started/"]
		);
	}

	#[test]
	fn test_view_name_display() {
		assert_eq!(ViewName::from_path("/a/b-c").to_string(), "a_b_c");
		assert_eq!(ViewName::root().into_string(), "root");
	}
}
