//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RoutesConfig::into_registry (permissive or strict insertion)
//!     → RouteRegistry, published via SharedRegistry
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of the shared registry
//! ```
//!
//! # Design Decisions
//! - A route table is immutable once built; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_registry, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, RouteConfig, RoutesConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
