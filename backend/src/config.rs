//! Server settings read from the environment.
//!
//! | Variable              | Default     |
//! |-----------------------|-------------|
//! | `CLINIC_HOST`         | `127.0.0.1` |
//! | `CLINIC_PORT`         | `8080`      |
//! | `CLINIC_OPEN_BROWSER` | `true`      |
//!
//! Unparseable values are reported and replaced by the default; the server
//! always starts.

use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the site in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("CLINIC_HOST") {
            let host = host.trim();
            if host.is_empty() {
                warn!("CLINIC_HOST is empty, using {}", DEFAULT_HOST);
            } else {
                config.host = host.to_string();
            }
        }

        if let Some(port) = lookup("CLINIC_PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) if port != 0 => config.port = port,
                _ => warn!("invalid CLINIC_PORT {:?}, using {}", port, DEFAULT_PORT),
            }
        }

        if let Some(flag) = lookup("CLINIC_OPEN_BROWSER") {
            match parse_flag(&flag) {
                Some(open) => config.open_browser = open,
                None => warn!("invalid CLINIC_OPEN_BROWSER {:?}, using true", flag),
            }
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("CLINIC_HOST", "0.0.0.0"),
            ("CLINIC_PORT", "3000"),
            ("CLINIC_OPEN_BROWSER", "no"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("CLINIC_HOST", "  "),
            ("CLINIC_PORT", "eighty"),
            ("CLINIC_OPEN_BROWSER", "maybe"),
        ]);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn port_zero_is_rejected() {
        assert_eq!(config_from(&[("CLINIC_PORT", "0")]).port, DEFAULT_PORT);
    }
}
