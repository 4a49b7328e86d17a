// Smart Connect - terminal client for a customer relationship backend
//
// Signs a user in, browses customers and their interaction history, records
// new customers and interactions, fetches recommendations and interaction
// analytics, and triggers coupon emails.
//
// Architecture:
// - API (reqwest): the CrmBackend contract and its HTTP implementation
// - Store: single state container; actions in, commands out, completions
//   resolved against request tickets so stale answers are dropped
// - Runtime (tokio): executes commands concurrently, returns completions
// - TUI (ratatui): renders the store and turns keys into actions

mod api;
mod cli;
mod config;
mod logging;
mod runtime;
mod store;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::{
    self,
    format::{Format, Json, JsonFields},
};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where human-readable log lines go besides the optional JSON file
enum LogSink {
    /// In-memory buffer rendered by the TUI
    Tui(LogBuffer),
    /// Plain fmt output on stderr (CLI subcommands)
    Stderr,
}

/// Build the non-blocking file writer when file logging is enabled
///
/// Returns None (after a warning on stderr) when the directory cannot be
/// created; the program keeps running without file logs.
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    // Writes happen on a background thread
    Some(tracing_appender::non_blocking(file_appender))
}

/// JSON layer for the rolling log file
///
/// Generic over the subscriber it sits on, so each stack builds its own.
fn json_file_layer<S>(
    file: Option<NonBlocking>,
) -> Option<fmt::Layer<S, JsonFields, Format<Json>, NonBlocking>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    file.map(|writer| fmt::layer().json().with_writer(writer).with_ansi(false))
}

/// TUI stack: log records go to the in-memory buffer (and the file)
fn tui_subscriber(
    filter: EnvFilter,
    buffer: LogBuffer,
    file: Option<NonBlocking>,
) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(buffer))
        .with(json_file_layer(file))
}

/// CLI stack: plain fmt output on stderr (and the file)
fn stderr_subscriber(
    filter: EnvFilter,
    file: Option<NonBlocking>,
) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(json_file_layer(file))
}

/// Initialize tracing
///
/// Precedence: RUST_LOG env var > config file > default "info". The returned
/// guard must live until exit so buffered file logs are flushed.
fn init_logging(logging: &LoggingConfig, sink: LogSink) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    let (file, guard) = match file_writer(logging) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    match sink {
        LogSink::Tui(buffer) => tui_subscriber(filter, buffer, file).init(),
        LogSink::Stderr => stderr_subscriber(filter, file).init(),
    }

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Subcommands (config, register) log to stderr and exit; the
    // subscriber can only be installed once per process
    if std::env::args().nth(1).is_some() {
        let _file_guard = init_logging(&config.logging, LogSink::Stderr);
        let handled = cli::handle_cli().await?;
        tracing::debug!(handled, "CLI finished");
        return Ok(());
    }

    // TUI mode: capture logs to the buffer so they don't garble the display
    let log_buffer = LogBuffer::new();
    let _file_guard = init_logging(&config.logging, LogSink::Tui(log_buffer.clone()));

    let backend = api::HttpBackend::from_config(&config)?;
    tracing::info!(
        api_url = backend.base_url(),
        timeout_secs = config.request_timeout_secs,
        "Starting smart-connect {}",
        config::VERSION
    );

    // Completions flow back to the UI loop over a bounded channel;
    // if it fills up, request tasks wait (backpressure)
    let (completion_tx, completion_rx) = mpsc::channel(runtime::COMPLETION_BUFFER);
    let executor = runtime::Executor::new(Arc::new(backend), completion_tx);
    let store = store::Store::new(config.username.clone());

    if let Err(e) = tui::run_tui(store, executor, completion_rx, log_buffer, config).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
