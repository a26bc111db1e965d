//! Named-route registry for hypermedia link generation.
//!
//! Routes pair a link-relationship name ("home", "search") with a URI or an
//! RFC 6570 URI Template. A [`RouteRegistry`] resolves names to routes, and
//! routes expand into concrete URLs.
//!
//! ```
//! use link_routes::{Route, RouteRegistry, Variables};
//!
//! let mut routes = RouteRegistry::new();
//! routes.add(Route::new("home", "https://example.com"));
//! routes.add(Route::templated("search", "https://example.com/search{?q}"));
//!
//! let url = routes
//!     .find_strict("search")
//!     .unwrap()
//!     .url_for(&Variables::new().with("q", "search-term"))
//!     .unwrap();
//! assert_eq!(url, "https://example.com/search?q=search-term");
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RoutesConfig;
pub use routing::{
    Routable, Route, RouteError, RouteOptions, RouteRegistry, RouteResult, SharedRegistry,
    VarValue, Variables,
};
