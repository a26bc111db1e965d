//! Route error definitions.

use thiserror::Error;

/// Errors raised by route expansion and registry operations.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route candidate lacks its name or its expansion target.
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Strict insertion found a route with the same name.
    #[error("Route already exists for {0}")]
    ExistingRoute(String),

    /// Strict lookup found no route with the given name.
    #[error("Route not found for {0}")]
    RouteNotFound(String),

    /// The template could not be parsed or expanded.
    #[error("Failed to expand template {template}: {source}")]
    Template {
        template: String,
        #[source]
        source: iri_string::template::Error,
    },
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
