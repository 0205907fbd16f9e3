//! Runtime configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to something unusable
    #[error("{name}={value:?} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A variable was not valid unicode
    #[error("{0} value is not valid unicode")]
    NotUnicode(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    /// Base URL of the charger search backend.
    pub backend_url: String,

    /// Address the web server binds to.
    pub bind_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Backend request timeout in seconds.
    pub timeout_secs: u64,

    /// How long an idle browser session is kept.
    pub session_ttl_secs: u64,

    /// Serve stations from this JSON file instead of calling the backend.
    pub mock_data: Option<PathBuf>,

    /// Override for the map tile URL template.
    pub tile_url: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("ev-finder/static"),
            timeout_secs: 30,
            session_ttl_secs: 60 * 60,
            mock_data: None,
            tile_url: None,
        }
    }
}

impl FinderConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let get = |name: &'static str| match lookup(name) {
            Ok(v) if !v.trim().is_empty() => Ok(Some(v)),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
        };

        let mut config = Self::default();

        if let Some(url) = get("EV_FINDER_BACKEND_URL")? {
            config.backend_url = url;
        }
        if let Some(addr) = get("EV_FINDER_BIND_ADDR")? {
            config.bind_addr = parse("EV_FINDER_BIND_ADDR", addr)?;
        }
        if let Some(dir) = get("EV_FINDER_STATIC_DIR")? {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(secs) = get("EV_FINDER_TIMEOUT_SECS")? {
            config.timeout_secs = parse("EV_FINDER_TIMEOUT_SECS", secs)?;
        }
        if let Some(secs) = get("EV_FINDER_SESSION_TTL_SECS")? {
            config.session_ttl_secs = parse("EV_FINDER_SESSION_TTL_SECS", secs)?;
        }
        config.mock_data = get("EV_FINDER_MOCK_DATA")?.map(PathBuf::from);
        config.tile_url = get("EV_FINDER_TILE_URL")?;

        Ok(config)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

fn parse<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<String, VarError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_when_unset() {
        let config = FinderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FinderConfig::default());
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.session_ttl(), Duration::from_secs(3600));
        assert!(config.mock_data.is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = FinderConfig::from_lookup(lookup(&[
            ("EV_FINDER_BACKEND_URL", "http://chargers.internal:8000"),
            ("EV_FINDER_BIND_ADDR", "0.0.0.0:8080"),
            ("EV_FINDER_STATIC_DIR", "/srv/static"),
            ("EV_FINDER_TIMEOUT_SECS", "5"),
            ("EV_FINDER_SESSION_TTL_SECS", "120"),
            ("EV_FINDER_MOCK_DATA", "data/stations.json"),
            ("EV_FINDER_TILE_URL", "https://tiles.example/{z}/{x}/{y}.png"),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "http://chargers.internal:8000");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.session_ttl_secs, 120);
        assert_eq!(config.mock_data, Some(PathBuf::from("data/stations.json")));
        assert_eq!(
            config.tile_url.as_deref(),
            Some("https://tiles.example/{z}/{x}/{y}.png")
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = FinderConfig::from_lookup(lookup(&[("EV_FINDER_MOCK_DATA", "  ")])).unwrap();
        assert!(config.mock_data.is_none());
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = FinderConfig::from_lookup(lookup(&[("EV_FINDER_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("EV_FINDER_TIMEOUT_SECS"));
    }

    #[test]
    fn rejects_bad_address() {
        let err =
            FinderConfig::from_lookup(lookup(&[("EV_FINDER_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "EV_FINDER_BIND_ADDR",
                ..
            }
        ));
    }
}
