use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use shared::{
    errors::ClientError,
    utils::{Telemetry, init_logger},
};
use std::{io::Write, process::ExitCode};
use storefront::{
    cli::{Cli, execute},
    config::Config,
    state::AppState,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = config
        .otel_endpoint
        .clone()
        .map(|endpoint| Telemetry::new("storefront", endpoint));

    let logger_provider = match telemetry.as_mut() {
        Some(telemetry) => {
            telemetry.init_tracer()?;
            Some(telemetry.init_logger()?)
        }
        None => None,
    };

    let _guard = init_logger(
        logger_provider.as_ref(),
        "storefront",
        config.is_dev,
        config.enable_file_log,
    )?;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("Storefront client using {}", config.api_url);

    let mut stdout = std::io::stdout();
    let outcome = execute(cli.command, &state, &mut stdout).await;

    if let Err(err) = &outcome {
        error!("Command failed: {err:#}");
    }

    if cli.metrics {
        write!(stdout, "{}", state.render_metrics().await?)?;
    }

    if let Some(telemetry) = telemetry {
        telemetry.shutdown()?;
    }

    outcome
}

/// Library failures print their own single-line message; anything else
/// keeps its context chain.
fn render_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(client_error) => client_error.message(),
        None => format!("{err:#}"),
    }
}
