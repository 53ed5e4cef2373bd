use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ShopchatConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub reporting: ReportingConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub socket_path: String,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Conversation listing behavior.
///
/// Ordering is fixed at most-recent-first (by the first message timestamp of
/// each conversation, descending) — the documented implementer's choice for
/// the conversations listing.
#[derive(Debug, Deserialize, Clone)]
pub struct ReportingConfig {
    pub page_size: u32,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: "127.0.0.1".to_string(),
            port: 8790,
        }
    }
}

/// Integration status flags, read once at startup and injected into server
/// state. Derived from which integration keys are present in the environment;
/// never re-read per request.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct FeatureFlags {
    pub ai_connected: bool,
    pub platform_connected: bool,
}

impl FeatureFlags {
    pub fn from_env() -> Self {
        Self {
            ai_connected: env_key_present("CLAUDE_API_KEY"),
            platform_connected: env_key_present("SHOPIFY_API_KEY"),
        }
    }
}

fn env_key_present(name: &str) -> bool {
    std::env::var(name).map(|v| !v.trim().is_empty()).unwrap_or(false)
}

impl ShopchatConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path))
            .build()?;
        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporting_defaults_to_twenty_per_page() {
        let reporting = ReportingConfig::default();
        assert_eq!(reporting.page_size, 20);
    }

    #[test]
    fn http_defaults_are_local() {
        let http = HttpConfig::default();
        assert!(http.enabled);
        assert_eq!(http.host, "127.0.0.1");
        assert_eq!(http.port, 8790);
    }

    #[test]
    fn feature_flags_default_disconnected() {
        let flags = FeatureFlags::default();
        assert!(!flags.ai_connected);
        assert!(!flags.platform_connected);
    }
}
