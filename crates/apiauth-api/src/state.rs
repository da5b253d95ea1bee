//! # Application State & Configuration
//!
//! Configuration is read from the environment at startup. The hook
//! registry is built once and shared across requests behind an `Arc`.

use std::str::FromStr;
use std::sync::Arc;

use apiauth_hook::HookRegistry;

/// Log output format for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other:?}")),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Read `PORT` and `LOG_FORMAT` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset or
    /// unparsable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid PORT, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "invalid LOG_FORMAT, using text");
                defaults.log_format
            }),
            None => defaults.log_format,
        };

        Self { port, log_format }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<HookRegistry>,
}

impl AppState {
    /// State with the standard hook registry.
    pub fn new() -> Self {
        Self::with_registry(HookRegistry::standard())
    }

    /// State serving the given registry.
    pub fn with_registry(registry: HookRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn reads_port_and_format() {
        let config = AppConfig::from_lookup(lookup(&[("PORT", "9090"), ("LOG_FORMAT", "JSON")]));
        assert_eq!(config.port, 9090);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[("PORT", "http"), ("LOG_FORMAT", "xml")]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn state_uses_standard_registry() {
        let state = AppState::new();
        assert_eq!(state.registry.type_name(), "AWS::SAM::ApiAuthValidator");
    }

    #[test]
    fn state_serves_given_registry() {
        let state = AppState::with_registry(HookRegistry::new("Test::Hook::Empty"));
        assert_eq!(state.registry.type_name(), "Test::Hook::Empty");
        assert!(!state.registry.handles(apiauth_hook::InvocationPoint::CreatePreProvision));
    }
}
