//! Configuration handling for the rating service.
//!
//! Only the outer surfaces are configurable. The fetch timeout and user agent
//! are fixed constants of the fetcher and deliberately absent here.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::str::FromStr;

/// Environment variable names.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

/// Encoding of log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: ENV_LOG_FORMAT,
                reason: format!("expected 'text' or 'json', got '{}'", other),
            }),
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: SocketAddr,
    log_format: LogFormat,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match env::var(ENV_BIND_ADDR) {
            Ok(raw) => parse_bind_addr(&raw)?,
            Err(_) => parse_bind_addr(DEFAULT_BIND_ADDR)?,
        };
        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_LOG_FORMAT,
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }

    /// TCP bind address for the web UI and JSON API.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
            field: ENV_BIND_ADDR,
            reason: e.to_string(),
        })
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [ENV_BIND_ADDR, ENV_LOG_FORMAT] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr().to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.log_format(), LogFormat::Text);
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_LOG_FORMAT, "JSON");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:9000");
        assert_eq!(cfg.log_format(), LogFormat::Json);
        clear_env();
    }

    #[test]
    fn rejects_invalid_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "localhost");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().starts_with("invalid value for 'BIND_ADDR'"));

        clear_env();
        unsafe {
            env::set_var(ENV_LOG_FORMAT, "xml");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("LOG_FORMAT"));
        clear_env();
    }
}
