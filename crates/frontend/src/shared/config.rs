use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix for every request path; empty means same origin
    pub base: String,
    pub login_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub notification_timeout_ms: u32,
    /// Pause before a reload so the success notification can be read
    pub reload_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""
login_path = "/login"

[ui]
notification_timeout_ms = 5000
reload_delay_ms = 1500

[logging]
level = "debug"
"#;

pub fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| AppConfig {
        api: ApiConfig {
            base: String::new(),
            login_path: "/login".to_string(),
        },
        ui: UiConfig {
            notification_timeout_ms: 5000,
            reload_delay_ms: 1500,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    })
}

/// Parse a TOML override; missing tables and keys keep their defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overrides: toml::Table = toml::from_str(contents)?;
    for (section, value) in overrides {
        match (merged.get_mut(&section), value) {
            (Some(toml::Value::Table(base)), toml::Value::Table(patch)) => {
                for (key, value) in patch {
                    base.insert(key, value);
                }
            }
            (_, value) => {
                merged.insert(section, value);
            }
        }
    }
    toml::Value::Table(merged).try_into()
}

/// Load configuration from the page
///
/// Search order:
/// 1. `<script id="app-config" type="text/toml">` rendered by the server
/// 2. Falls back to embedded default config
pub fn load_config() -> AppConfig {
    let contents = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match contents {
        Some(text) if !text.trim().is_empty() => match parse_config(&text) {
            Ok(config) => config,
            Err(e) => {
                // logger is not up yet
                web_sys::console::warn_1(&format!("Invalid #{}: {}", CONFIG_ELEMENT_ID, e).into());
                default_config()
            }
        },
        _ => default_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config("");
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base, "");
        assert_eq!(config.api.login_path, "/login");
        assert_eq!(config.ui.notification_timeout_ms, 5000);
        assert_eq!(config.logging.level(), log::Level::Debug);
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
[api]
base = "http://localhost:8080"

[logging]
level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base, "http://localhost:8080");
        assert_eq!(config.api.login_path, "/login");
        assert_eq!(config.ui.reload_delay_ms, 1500);
        assert_eq!(config.logging.level(), log::Level::Warn);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = parse_config("[logging]\nlevel = \"chatty\"").unwrap();
        assert_eq!(config.logging.level(), log::Level::Debug);
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(parse_config("[ui]\nnotification_timeout_ms = \"soon\"").is_err());
        assert!(parse_config("not toml at all = = =").is_err());
    }
}
