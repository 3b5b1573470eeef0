use std::env::{self, VarError};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::services::estimator_config::LOG_ENV_VAR;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("{LOG_ENV_VAR} is not valid unicode")]
    EnvVar(#[source] VarError),
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber. `VISA_ESTIMATES_LOG` takes precedence
/// over `log_level`; a malformed value is an error. Logs go to stderr so
/// command output stays clean.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let directives = match env::var(LOG_ENV_VAR) {
        Ok(value) => value,
        Err(VarError::NotPresent) => log_level.to_string(),
        Err(e) => return Err(TelemetryError::EnvVar(e)),
    };
    let env_filter = build_filter(&directives)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::EnvFilter {
        value: directives.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_and_target_directives() {
        assert!(build_filter("warn").is_ok());
        assert!(build_filter("visa_estimates=debug,info").is_ok());
    }

    #[test]
    fn rejects_unknown_level() {
        let err = build_filter("visa_estimates=loud").unwrap_err();
        assert!(matches!(
            err,
            TelemetryError::EnvFilter { ref value, .. } if value == "visa_estimates=loud"
        ));
    }
}
