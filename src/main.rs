// src/main.rs
use clap::Parser;
use namebuster::cli::Args;
use namebuster::commands::{apply_args, handle_generate_command, usage_if_no_input};
use namebuster::config::Config;
use namebuster::error::AppError;
use namebuster::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let usage_exit = usage_if_no_input(&args, &mut std::io::stdout().lock())?;
    if let Some(exit_code) = usage_exit {
        std::process::exit(exit_code);
    }

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    apply_args(&mut config, &args)?;

    // The guard must be kept alive for the duration of the program
    let _guard = setup_logging(&args, &config)?;

    if args.list_config {
        config.display();
        return Ok(());
    }

    match args.joined_input() {
        Some(input) => handle_generate_command(&input, &config).await,
        None => Ok(()),
    }
}
