use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::args::PokerArgs;
use crate::config::load_endpoints;
use crate::dispatch::dispatch;
use crate::error::{AppError, AppResult, ConfigError};
use crate::http::build_client;

pub(crate) fn run() -> AppResult<()> {
    let args = PokerArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    load_env(args.env_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn load_env(env_file: Option<&str>) -> AppResult<()> {
    let Some(path) = env_file else {
        // A ./.env file is picked up when present; its absence is fine.
        drop(dotenvy::dotenv());
        return Ok(());
    };
    dotenvy::from_path(path).map_err(|err| {
        AppError::config(ConfigError::LoadEnvFile {
            path: PathBuf::from(path),
            source: err,
        })
    })?;
    Ok(())
}

async fn run_async(args: &PokerArgs) -> AppResult<()> {
    let endpoints = load_endpoints(args.config.as_deref())?;
    let client = build_client(args.timeout)?;

    let report = dispatch(&client, endpoints).await;

    info!(
        elapsed = ?report.elapsed,
        total = report.total,
        succeeded = report.succeeded,
        failed = report.failed,
        "poked endpoints"
    );

    // Poke failures are best-effort: they were logged and counted, and the
    // exit code reflects setup success only.
    Ok(())
}
