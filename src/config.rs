use std::env;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub app_version: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let app_version = non_blank(env::var("APP_VERSION").ok())
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        Self { port, app_version }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Nothing is signed, so the key is only checked for presence at startup.
pub fn secret_key_is_set() -> bool {
    non_blank(env::var("SECRET_KEY").ok()).is_some()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some("2.0.1".into())).as_deref(), Some("2.0.1"));
    }

    #[test]
    fn default_config_carries_no_secret() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
    }
}
