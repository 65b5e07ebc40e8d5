#![warn(clippy::all, clippy::pedantic)]

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use vitaldash::error::localized_message;
use vitaldash::observability::init_logging;
use vitaldash::ui::style;
use vitaldash::{Cli, Config};

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load_or_init()?,
    };

    // Logging before anything else can emit events.
    init_logging(&config.observability)?;
    config.apply_locale_with(cli.locale.as_deref());

    vitaldash::app::dispatch(cli, Arc::new(config)).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("{}", style::error(localized_message(&err)));
            ExitCode::FAILURE
        }
    }
}
