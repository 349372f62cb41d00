use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "NOTES_PORT";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 8080;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment. An unparsable port falls
    /// back to the default.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(env_vars::HOST).ok(), env::var(env_vars::PORT).ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        let port = match port {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid {} value '{}', using default {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.host, defaults::HOST);
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(Some("0.0.0.0".to_string()), Some("9200".to_string()));
        assert_eq!(config.bind_addr(), "0.0.0.0:9200");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = Config::from_vars(Some("  ".to_string()), Some("not-a-port".to_string()));
        assert_eq!(config.host, defaults::HOST);
        assert_eq!(config.port, defaults::PORT);
    }
}
