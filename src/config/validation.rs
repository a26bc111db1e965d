//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Report route entries missing a name or a path
//! - Detect duplicate names when the table is strict
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutesConfig → Result<(), Vec<ValidationError>>
//! - Empty names, empty paths and template syntax are not checked

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RoutesConfig;

/// A semantic problem in the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has no name")]
    MissingName { index: usize },

    #[error("route #{index} ({name}) has no path")]
    MissingPath {
        index: usize,
        name: String,
    },

    #[error("route #{index} duplicates name {name}")]
    DuplicateName {
        index: usize,
        name: String,
    },
}

/// Check a config before it is turned into a registry.
pub fn validate_config(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        let Some(name) = route.name.as_deref() else {
            errors.push(ValidationError::MissingName { index });
            continue;
        };

        if route.path.is_none() {
            errors.push(ValidationError::MissingPath {
                index,
                name: name.to_string(),
            });
        }

        if !seen.insert(name) {
            if config.strict {
                errors.push(ValidationError::DuplicateName {
                    index,
                    name: name.to_string(),
                });
            } else {
                tracing::warn!(
                    route = %name,
                    index,
                    "Duplicate route name, keeping first definition"
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
