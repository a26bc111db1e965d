//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route definitions (at startup):
//!     Route::new / RouteConfig
//!     → registry.rs (uniqueness by name, insertion order)
//!     → shared.rs (publish for concurrent readers)
//!
//! Link generation:
//!     name + Variables
//!     → registry.rs (name lookup)
//!     → route.rs (literal path, or template.rs expansion)
//!     → Return: URL string or RouteError
//! ```
//!
//! # Design Decisions
//! - One direction only: name → URL, never URL → name
//! - Registries are append-only; reload replaces the whole registry
//! - Any `Routable` type can be registered, not just `Route`

pub mod registry;
pub mod route;
pub mod shared;
pub mod template;
pub mod types;

pub use registry::RouteRegistry;
pub use route::{Routable, Route, RouteOptions};
pub use shared::SharedRegistry;
pub use template::{VarValue, Variables};
pub use types::{RouteError, RouteResult};
