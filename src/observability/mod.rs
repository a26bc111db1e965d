//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, config, watcher
//!     → tracing events (structured fields: route, path, routes)
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stderr/stdout
//! ```

pub mod logging;
