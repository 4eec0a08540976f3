use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tally::config::{Cli, Config};
use tally::{logging, App, AppError, AppFlags};

async fn run(cli: Cli) -> Result<u64, AppError> {
    let mut config = Config::load(cli.config.as_deref())?;
    let env_log = std::env::var_os("TALLY_LOG").map(PathBuf::from);
    cli.apply(&mut config, env_log)?;

    logging::init(&config.log)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting tally");

    let app = tally_core::run_with::<App>(AppFlags::default(), config.program_options()).await?;
    let count = app.state().counter();
    tracing::info!(count, "exited");
    Ok(count)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(count) => {
            println!("Final count: {count}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tally: {err}");
            ExitCode::FAILURE
        }
    }
}
