//! Server settings read from the environment.

use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    /// Reads `EXPLAINER_HOST`, `EXPLAINER_PORT` and `EXPLAINER_OPEN_BROWSER`,
    /// keeping the default for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("EXPLAINER_HOST")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("EXPLAINER_PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(defaults.port),
            open_browser: lookup("EXPLAINER_OPEN_BROWSER")
                .map(|flag| !matches!(flag.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("EXPLAINER_HOST", "0.0.0.0"),
            ("EXPLAINER_PORT", "9000"),
            ("EXPLAINER_OPEN_BROWSER", "off"),
        ]);
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config_from(&[("EXPLAINER_PORT", "eighty")]).port, 8080);
    }
}
