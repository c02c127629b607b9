use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::inventory::{StatusPolicy, DEFAULT_CRITICAL_RATIO};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub classification: ClassificationConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let critical_ratio = match env::var("APP_CRITICAL_RATIO") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidCriticalRatio { value: raw.clone() })?,
            Err(_) => DEFAULT_CRITICAL_RATIO,
        };
        let status_policy = StatusPolicy::new(critical_ratio).map_err(|_| {
            ConfigError::InvalidCriticalRatio {
                value: critical_ratio.to_string(),
            }
        })?;

        let sign_in_delay_ms = env::var("APP_AUTH_DELAY_MS")
            .unwrap_or_else(|_| DEFAULT_SIGN_IN_DELAY_MS.to_string())
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidAuthDelay)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            classification: ClassificationConfig { status_policy },
            auth: AuthConfig {
                sign_in_delay: Duration::from_millis(sign_in_delay_ms),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Threshold policy applied when classifying inventory.
#[derive(Debug, Clone, Default)]
pub struct ClassificationConfig {
    pub status_policy: StatusPolicy,
}

pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 2000;

/// Behavior of the mock sign-in flow.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub sign_in_delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sign_in_delay: Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidCriticalRatio { value: String },
    InvalidAuthDelay,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidCriticalRatio { value } => write!(
                f,
                "APP_CRITICAL_RATIO must be a number in (0, 1], got '{}'",
                value
            ),
            ConfigError::InvalidAuthDelay => {
                write!(f, "APP_AUTH_DELAY_MS must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidCriticalRatio { .. }
            | ConfigError::InvalidAuthDelay => None,
        }
    }
}
