//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for cloud monitoring
//! - Sandbox: Colorful, human-readable logs for development
//!
//! `LOG_FORMAT` (json|pretty) overrides the environment default and
//! `LOG_LEVEL` sets the base level when `RUST_LOG` is absent.

use crate::config::{get_environment, get_log_format, get_log_level};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn resolve(environment: &str, explicit: Option<&str>) -> Self {
        match explicit.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") | Some("text") => LogFormat::Pretty,
            _ if is_production(environment) => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// Filter directives: `RUST_LOG` verbatim, else `level` with the HTTP
/// client stack held at warn
pub fn filter_directives(rust_log: Option<&str>, level: &str) -> String {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => format!("{},hyper=warn,reqwest=warn", level.trim()),
    }
}

/// Initialize logging based on the environment
pub fn init_logging() {
    let env = get_environment();
    let format = LogFormat::resolve(&env, get_log_format().as_deref());
    let directives = filter_directives(std::env::var("RUST_LOG").ok().as_deref(), &get_log_level());
    let env_filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .init(),
    }

    debug!(environment = %env, format = ?format, filter = %directives, "Logging initialized");
}
