// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jobq coordinator daemon (jobqd)
//!
//! Starts a coordinator, submits the configured jobs, and drives a pool of
//! simulated workers until there is nothing left to do. Final statistics go
//! to stdout; logs go to stderr or the configured log file.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jobq_core::{JobqConfig, LoggingConfig};
use jobq_daemon::{CoordinatorHandle, PoolOptions, WorkerPool};
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[derive(Parser)]
#[command(name = "jobqd", version, about = "Single-node job distribution coordinator")]
struct Args {
    /// Path to a TOML config file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Number of workers, overriding the config file
    #[arg(long)]
    workers: Option<usize>,

    /// Print final statistics as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => JobqConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => JobqConfig::default(),
    };
    if let Some(count) = args.workers {
        config.workers.count = count;
    }
    config.validate()?;

    // Held until exit so buffered log lines are flushed
    let _log_guard = setup_logging(&config.logging)?;

    let coordinator = CoordinatorHandle::start_with_capacity(
        config.coordinator.start_options(),
        config.coordinator.mailbox_capacity,
    )?;
    for job in &config.jobs {
        coordinator.submit(job.payload.clone(), job.duration).await?;
    }
    info!(
        submitted = config.jobs.len(),
        seeded = config.coordinator.seed.len(),
        "jobs loaded"
    );

    let pool = WorkerPool::new(coordinator.clone(), PoolOptions::from(&config.workers));
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        report = pool.run() => {
            report?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received SIGINT, shutting down...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down...");
        }
    }

    let stats = coordinator.statistics().await?;
    coordinator.shutdown().await?;
    coordinator.wait_for_stop().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats);
    }
    Ok(())
}

fn setup_logging(
    logging: &LoggingConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("invalid log level {:?}", logging.level))?;

    let Some(path) = &logging.file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(Some(guard))
}
