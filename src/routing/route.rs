//! Named routes.
//!
//! # Responsibilities
//! - Pair a link-relationship name with a URI or URI Template
//! - Expand templated paths on demand
//! - Define the `Routable` capability the registry admits
//!
//! # Design Decisions
//! - Routes are immutable once constructed
//! - No validation of empty names or paths
//! - The raw path is kept verbatim; expansion never rewrites it

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::routing::template::{self, Variables};
use crate::routing::types::RouteResult;

/// Anything that can be registered and resolved by name.
pub trait Routable {
    /// The link-relationship name (e.g. "home", "search").
    fn name(&self) -> &str;

    /// Produce the final URL, expanding with `variables` where applicable.
    fn url_for(&self, variables: &Variables) -> RouteResult<String>;

    /// Produce the URL with no variables supplied.
    fn url(&self) -> RouteResult<String> {
        self.url_for(&Variables::new())
    }
}

impl<T: Routable + ?Sized> Routable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn url_for(&self, variables: &Variables) -> RouteResult<String> {
        (**self).url_for(variables)
    }
}

impl<T: Routable + ?Sized> Routable for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn url_for(&self, variables: &Variables) -> RouteResult<String> {
        (**self).url_for(variables)
    }
}

impl<T: Routable + ?Sized> Routable for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn url_for(&self, variables: &Variables) -> RouteResult<String> {
        (**self).url_for(variables)
    }
}

/// Construction options for a [`Route`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Run the path through URI Template expansion.
    pub templated: bool,
}

/// A named URI or URI Template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    name: String,
    path: String,
    templated: bool,
}

impl Route {
    /// Create a route with a literal URI.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_options(name, path, RouteOptions::default())
    }

    /// Create a route whose path is a URI Template.
    pub fn templated(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_options(name, path, RouteOptions { templated: true })
    }

    pub fn with_options(
        name: impl Into<String>,
        path: impl Into<String>,
        options: RouteOptions,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            templated: options.templated,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unexpanded path exactly as constructed.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_templated(&self) -> bool {
        self.templated
    }

    /// Expand the route. Literal routes ignore `variables`.
    pub fn url_for(&self, variables: &Variables) -> RouteResult<String> {
        if self.templated {
            template::expand(&self.path, variables)
        } else {
            Ok(self.path.clone())
        }
    }

    /// Compare by name alone.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Routable for Route {
    fn name(&self) -> &str {
        Route::name(self)
    }

    fn url_for(&self, variables: &Variables) -> RouteResult<String> {
        Route::url_for(self, variables)
    }
}

// Name first so sorted routes read alphabetically; the remaining fields
// keep `Ord` consistent with `Eq`.
impl Ord for Route {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_name(other)
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.templated.cmp(&other.templated))
    }
}

impl PartialOrd for Route {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_route() {
        let route = Route::new("home", "http://www.example.com");

        assert_eq!(route.name(), "home");
        assert_eq!(route.path(), "http://www.example.com");
        assert!(!route.is_templated());
        assert_eq!(route.url().unwrap(), "http://www.example.com");
    }

    #[test]
    fn test_literal_route_ignores_variables() {
        let route = Route::new("home", "http://www.example.com/{id}");
        let vars = Variables::new().with("id", "42");

        assert_eq!(route.url_for(&vars).unwrap(), "http://www.example.com/{id}");
    }

    #[test]
    fn test_templated_route() {
        let route = Route::templated("search", "http://www.example.com/search{?q}");
        let vars = Variables::new().with("q", "search-term");

        assert_eq!(
            route.url_for(&vars).unwrap(),
            "http://www.example.com/search?q=search-term"
        );
        assert_eq!(route.url().unwrap(), "http://www.example.com/search");
    }

    #[test]
    fn test_path_stays_raw_after_expansion() {
        let route = Route::templated("search", "http://www.example.com/search{?q}");
        let _ = route.url_for(&Variables::new().with("q", "a"));
        let _ = route.url();

        assert_eq!(route.path(), "http://www.example.com/search{?q}");
    }

    #[test]
    fn test_with_options_defaults_to_literal() {
        let route = Route::with_options("home", "/", RouteOptions::default());
        assert!(!route.is_templated());

        let route = Route::with_options("search", "/s{?q}", RouteOptions { templated: true });
        assert!(route.is_templated());
    }

    #[test]
    fn test_empty_name_and_path_accepted() {
        let route = Route::new("", "");
        assert_eq!(route.name(), "");
        assert_eq!(route.url().unwrap(), "");
    }

    #[test]
    fn test_ordering_by_name() {
        let mut routes = vec![
            Route::new("search", "/search"),
            Route::new("about", "/about"),
            Route::new("home", "/"),
        ];
        routes.sort();

        let names: Vec<_> = routes.iter().map(Route::name).collect();
        assert_eq!(names, ["about", "home", "search"]);
    }

    #[test]
    fn test_same_name_compares_equal_by_name_only() {
        let a = Route::new("home", "/a");
        let b = Route::new("home", "/b");

        assert_eq!(a.cmp_by_name(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shared_handles_are_routable() {
        let route = Arc::new(Route::new("home", "/"));
        let boxed: Box<dyn Routable> = Box::new(Route::new("about", "/about"));

        assert_eq!(Routable::name(&route), "home");
        assert_eq!(boxed.name(), "about");
        assert_eq!(boxed.url().unwrap(), "/about");
    }
}
