use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

const SERVICE_TARGETS: [&str; 2] = ["lead_scoring", "lead_scoring_api"];

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global fmt subscriber on stderr. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// A bare level such as `debug` applies to the service crates only and leaves
/// dependencies at `warn`; anything else is treated as a full filter directive.
pub fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    let directive = filter_directive(log_level);
    EnvFilter::try_new(&directive).map_err(|source| TelemetryError::EnvFilter {
        value: log_level.to_string(),
        source,
    })
}

fn filter_directive(log_level: &str) -> String {
    let level = log_level.trim();
    let is_bare_level = matches!(
        level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    );

    if !is_bare_level {
        return level.to_string();
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(SERVICE_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}
