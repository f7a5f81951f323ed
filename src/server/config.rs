use crate::server::{
    error::{config::ConfigError, AppError},
    service::comment::FanOutLimits,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FAN_OUT_WIDTH: usize = 8;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Concurrent enrichment tasks per aggregation level.
    pub fan_out: FanOutLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            fan_out: FanOutLimits {
                parent: width_from_env("PARENT_FAN_OUT_WIDTH")?,
                reply: width_from_env("REPLY_FAN_OUT_WIDTH")?,
            },
        })
    }
}

/// Reads an optional fan-out width, falling back to the default when unset.
fn width_from_env(name: &str) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse_width(name, &value),
        Err(_) => Ok(DEFAULT_FAN_OUT_WIDTH),
    }
}

fn parse_width(name: &str, value: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let width = value
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid(&e.to_string()))?;

    if width == 0 {
        return Err(invalid("width must be at least 1"));
    }

    Ok(width)
}
