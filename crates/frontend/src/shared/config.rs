use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Debug`.
    pub fn log_level(&self) -> log::Level {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"

[logging]
level = "debug"
"#;

/// Build-time override for the API base URL
const API_URL_OVERRIDE: Option<&str> = option_env!("DASHBOARD_API_URL");

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a configuration document and apply the build-time override.
pub fn load_config(contents: &str, api_url_override: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if let Some(url) = api_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    if config.api.base_url.is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    Ok(config)
}

fn embedded_defaults() -> Config {
    Config {
        api: ApiConfig {
            base_url: "http://localhost:8000".to_string(),
        },
        logging: LoggingConfig::default(),
    }
}

/// Process-wide configuration, resolved once on first use
pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| match load_config(DEFAULT_CONFIG, API_URL_OVERRIDE) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, using embedded defaults: {}", e);
            embedded_defaults()
        }
    })
}
