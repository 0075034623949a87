use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

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
    pub classifier: ClassifierConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            classifier: ClassifierConfig::from_env()?,
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub const DEFAULT_CLASSIFIER_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Connection and pacing settings for the external intent classifier.
#[derive(Clone)]
pub struct ClassifierConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub request_timeout: Duration,
}

impl ClassifierConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let endpoint =
            env::var("CLASSIFIER_API_URL").unwrap_or_else(|_| DEFAULT_CLASSIFIER_URL.to_string());
        let api_key = env::var("CLASSIFIER_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
        let model =
            env::var("CLASSIFIER_MODEL").unwrap_or_else(|_| DEFAULT_CLASSIFIER_MODEL.to_string());

        let max_tokens = parse_number("CLASSIFIER_MAX_TOKENS", 500)?;
        let batch_size = parse_number("CLASSIFIER_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        let delay_ms = parse_number("CLASSIFIER_BATCH_DELAY_MS", 1000u64)?;
        let timeout_secs = parse_number("CLASSIFIER_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            endpoint,
            api_key,
            model,
            max_tokens,
            batch_size,
            batch_delay: Duration::from_millis(delay_ms),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CLASSIFIER_URL.to_string(),
            api_key: None,
            model: DEFAULT_CLASSIFIER_MODEL.to_string(),
            max_tokens: 500,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(30),
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("batch_size", &self.batch_size)
            .field("batch_delay", &self.batch_delay)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { var: &'static str },
    InvalidBatchSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { var } => {
                write!(f, "{var} must be a non-negative integer")
            }
            ConfigError::InvalidBatchSize => {
                write!(f, "CLASSIFIER_BATCH_SIZE must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidBatchSize => None,
        }
    }
}
