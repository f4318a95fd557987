//! Server configuration read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "tasks_api=debug,tasks_core=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Build from `TASKS_HOST` and `TASKS_PORT` (or `PORT`)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = env_parsed(&lookup, &["TASKS_HOST"], defaults.host);
        let port = env_parsed(&lookup, &["TASKS_PORT", "PORT"], defaults.port);
        Self { host, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_parsed<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    names: &[&str],
    default: T,
) -> T {
    let Some((name, raw)) = names
        .iter()
        .find_map(|&name| lookup(name).map(|raw| (name, raw)))
    else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}={:?}, using default", name, raw);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().port(), 3000);
    }

    #[test]
    fn test_port_prefers_tasks_port() {
        assert_eq!(config_from(&[("PORT", "8080")]).port, 8080);
        assert_eq!(
            config_from(&[("TASKS_PORT", "9090"), ("PORT", "8080")]).port,
            9090
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("TASKS_PORT", "not-a-port"), ("TASKS_HOST", "nowhere")]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_host_override() {
        let config = config_from(&[("TASKS_HOST", "127.0.0.1")]);
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }
}
