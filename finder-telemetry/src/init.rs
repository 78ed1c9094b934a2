//! Telemetry initialization

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize console logging on stderr.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Only the first
/// call across [`init_telemetry`] and [`init_json_telemetry`] installs a
/// subscriber; later calls are no-ops.
///
/// # Example
/// ```
/// use finder_telemetry::init_telemetry;
/// init_telemetry("restaurant-finder").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut result = Ok(());

    INIT.call_once(|| {
        result = tracing_subscriber::registry()
            .with(env_filter())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .try_init()
            .map_err(Into::into);

        tracing::info!(service.name = service_name, "Telemetry initialized");
    });

    result
}

/// Initialize newline-delimited JSON logging, for log shippers.
pub fn init_json_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut result = Ok(());

    INIT.call_once(|| {
        result = tracing_subscriber::registry()
            .with(env_filter())
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            )
            .try_init()
            .map_err(Into::into);

        tracing::info!(service.name = service_name, format = "json", "Telemetry initialized");
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init_telemetry("test-service").is_ok());
        assert!(init_telemetry("test-service").is_ok());
        assert!(init_json_telemetry("test-service").is_ok());
    }
}
