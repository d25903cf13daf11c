use anyhow::{Context, Result};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// Console output goes to stderr and is silent unless `RUST_LOG` is set. The
/// JSON file layer is only attached when `enable_file` is on; keep the
/// returned guard alive for as long as file logging should flush.
pub fn init_logger(
    sdk_logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    is_dev: bool,
    enable_file: bool,
) -> Result<Option<WorkerGuard>> {
    let log_dir = if is_dev { "./logs" } else { "/var/log/app" };

    let (file_layer, guard) = if enable_file {
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(format!("rust_app_{component}"))
            .filename_suffix("log")
            .build(log_dir)
            .with_context(|| format!("Failed to open log directory {log_dir}"))?;
        let (file_writer, guard) = non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    let console_layer = fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(console_filter);

    let otel_layer = match sdk_logger_provider {
        Some(provider) => {
            let otel_filter = EnvFilter::new("info")
                .add_directive("hyper=off".parse()?)
                .add_directive("opentelemetry=off".parse()?)
                .add_directive("tonic=off".parse()?)
                .add_directive("h2=off".parse()?)
                .add_directive("reqwest=off".parse()?);

            Some(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
