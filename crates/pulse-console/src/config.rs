use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::Path;

use pulse_types::Showcase;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub showcase: ShowcaseConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

/// Optional JSON file replacing the built-in example data served by the API.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ShowcaseConfig {
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("failed to parse showcase {path}: {source}")]
    Showcase {
        path: String,
        source: serde_json::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: "127.0.0.1".into(),
                port: 3000,
            },
            showcase: ShowcaseConfig::default(),
        }
    }
}

impl Config {
    /// Listen address from `bind` and `port`; IPv6 binds need no brackets.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.server.bind.parse()?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

pub fn try_load(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

pub fn load(path: &str) -> Config {
    try_load(path).unwrap_or_else(|e| {
        tracing::warn!("{e}, using defaults");
        Config::default()
    })
}

pub fn try_load_showcase(path: &Path) -> Result<Showcase, ConfigError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Showcase {
        path: display,
        source,
    })
}

/// Example data for the API: the configured file when it loads, the built-in
/// samples otherwise.
pub fn load_showcase(config: &ShowcaseConfig) -> Showcase {
    let Some(path) = config.path.as_deref() else {
        return Showcase::default();
    };
    match try_load_showcase(Path::new(path)) {
        Ok(showcase) => {
            tracing::info!(
                metrics = showcase.metrics.len(),
                points = showcase.radar.data.len(),
                "loaded showcase from {path}"
            );
            showcase
        }
        Err(e) => {
            tracing::warn!("{e}, using built-in showcase");
            Showcase::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("pulse-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0"
            port = 8080

            [showcase]
            path = "showcase.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.showcase.path.as_deref(), Some("showcase.json"));
    }

    #[test]
    fn showcase_section_is_optional() {
        let config: Config = toml::from_str("[server]\nbind = \"::1\"\nport = 9000\n").unwrap();
        assert_eq!(config.showcase, ShowcaseConfig::default());
    }

    #[test]
    fn ipv6_bind_builds_a_socket_address() {
        let config: Config = toml::from_str("[server]\nbind = \"::1\"\nport = 9000\n").unwrap();
        let addr = config.socket_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 9000);
        assert_eq!(addr.to_string(), "[::1]:9000");
    }

    #[test]
    fn hostname_bind_is_rejected() {
        let mut config = Config::default();
        config.server.bind = "localhost".into();
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let err = try_load("/nonexistent/pulse.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(load("/nonexistent/pulse.toml"), Config::default());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let path = temp_file("bad.toml", "[server]\nport = \"not a number\"\n");
        let err = try_load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn showcase_file_overrides_samples() {
        let json = r#"{
            "metrics": [{"title": "Only", "value": 1}],
            "radar": {"data": [{"category": "A", "value": 5, "fullMark": 10}], "title": "Mini"}
        }"#;
        let path = temp_file("showcase.json", json);
        let showcase = load_showcase(&ShowcaseConfig {
            path: Some(path.to_string_lossy().into_owned()),
        });
        assert_eq!(showcase.metrics.len(), 1);
        assert_eq!(showcase.radar.title.as_deref(), Some("Mini"));
        std::fs::remove_file(path).ok();

        let fallback = load_showcase(&ShowcaseConfig {
            path: Some("/nonexistent/showcase.json".into()),
        });
        assert_eq!(fallback, Showcase::default());
    }
}
