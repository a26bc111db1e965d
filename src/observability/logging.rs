//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Precedence: `RUST_LOG`, then an explicit level, then the config file
//! - Logs go to stderr so expanded URLs on stdout stay pipeable

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

/// Level used when neither a flag nor a config file supplies one.
pub const FALLBACK_LEVEL: &str = "warn";

/// Pick the log level: an explicit request wins over the config file.
pub fn effective_level<'a>(
    requested: Option<&'a str>,
    configured: Option<&'a ObservabilityConfig>,
) -> &'a str {
    requested
        .or(configured.map(|config| config.log_level.as_str()))
        .unwrap_or(FALLBACK_LEVEL)
}

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(level: &str) -> String {
    format!("link_routes={level},routes_cli={level}")
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(level).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("debug"), "link_routes=debug,routes_cli=debug");
    }

    #[test]
    fn test_effective_level_prefers_request() {
        let config = ObservabilityConfig {
            log_level: "debug".into(),
        };

        assert_eq!(effective_level(Some("trace"), Some(&config)), "trace");
        assert_eq!(effective_level(None, Some(&config)), "debug");
        assert_eq!(effective_level(None, None), FALLBACK_LEVEL);
    }

    #[test]
    fn test_effective_level_from_parsed_file() {
        let content = "[observability]\nlog_level = \"debug\"\n";
        let config = crate::config::parse_config(content).unwrap();
        assert_eq!(effective_level(None, Some(&config.observability)), "debug");
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging("info");
        assert!(init_logging("info").is_err());
    }
}
