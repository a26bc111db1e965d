//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{Route, RouteError, RouteOptions, RouteRegistry, RouteResult};

/// Root configuration: the route table plus ambient settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutesConfig {
    /// Reject duplicate names instead of keeping the first definition.
    pub strict: bool,

    /// Route definitions, in registration order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl RoutesConfig {
    /// Build a registry from the route definitions.
    pub fn into_registry(self) -> RouteResult<RouteRegistry> {
        let mut registry = RouteRegistry::new();
        for route in self.routes {
            if self.strict {
                registry.try_add_strict(route)?;
            } else {
                registry.try_add(route)?;
            }
        }
        Ok(registry)
    }
}

/// A single route definition as written in the config file.
///
/// Fields are optional so an incomplete entry can be reported instead of
/// failing deserialization of the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Link-relationship name.
    pub name: Option<String>,

    /// Literal URI or URI Template.
    #[serde(alias = "url")]
    pub path: Option<String>,

    /// Expand `path` as a URI Template.
    #[serde(default)]
    pub templated: bool,
}

impl TryFrom<RouteConfig> for Route {
    type Error = RouteError;

    fn try_from(config: RouteConfig) -> Result<Self, Self::Error> {
        let name = config
            .name
            .ok_or_else(|| RouteError::InvalidRoute("route must have a name".into()))?;
        let path = config.path.ok_or_else(|| {
            RouteError::InvalidRoute(format!("route {name} must have a path"))
        })?;

        Ok(Route::with_options(
            name,
            path,
            RouteOptions {
                templated: config.templated,
            },
        ))
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
