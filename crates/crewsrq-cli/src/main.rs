//! crewsrq - chapter event scraper CLI.

/// Application configuration (TOML).
mod config;
/// CSV and JSON writers.
mod export;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};
use crewsrq_api::pipeline::run_pipeline;
use crewsrq_api::present::present;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Config file (default: `~/.config/crewsrq/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Fetch, filter and join upcoming events.
    Fetch(FetchArgs),
    /// Configuration operations.
    Config(ConfigCommand),
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
struct FetchArgs {
    /// Also write the events to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print events as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the effective configuration as TOML.
    Show,
}

/// Loads the config from `--config` or the default location.
fn load_config(file: Option<&PathBuf>) -> Result<AppConfig> {
    let path = resolve_config_path(file)?;
    tracing::debug!(path = %path.display(), "Loading config");
    AppConfig::load(&path)
}

/// Runs the `fetch` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, a client fails to build,
/// the pipeline fails, or output cannot be written.
#[instrument(skip_all)]
async fn run_fetch(args: &FetchArgs, file: Option<&PathBuf>) -> Result<()> {
    let config = load_config(file)?;
    let listings = config.listings_client()?;
    let slugs = config.content_client()?;

    let events = run_pipeline(
        &listings,
        &slugs,
        &config.pacer(),
        &config.pipeline_settings(),
    )
    .await
    .context("failed to collect events")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let events = if args.json {
        export::write_json(&events, &mut out)?;
        events
    } else {
        present(events, &mut out)?
    };

    if let Some(path) = &args.csv {
        export::write_csv_file(&events, path)?;
    }

    tracing::info!("Total: {} events", events.len());
    Ok(())
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or rendered.
fn run_config_show(file: Option<&PathBuf>) -> Result<()> {
    let config = load_config(file)?;
    let rendered = config.to_toml()?;
    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("failed to write config")?;
    Ok(())
}

/// Installs the tracing subscriber. Logs go to stderr.
fn init_tracing() {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch(args) => run_fetch(&args, cli.config.as_ref()).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Show => run_config_show(cli.config.as_ref()),
        },
    }
}
