use crate::cli::Args;
use crate::config::Config;
use crate::config::paths::split_log_file_path;
use crate::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the filter for a layer, honouring `RUST_LOG` on top of the default directive.
fn build_filter(default_directive: &str) -> Result<EnvFilter, AppError> {
    let directive: Directive = default_directive
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging for the application.
///
/// - Logs always go to stderr so stdout stays a clean candidate list
/// - stderr shows warnings, or debug output with `--debug`
/// - If a log file is set (argument first, then config), a daily rolling
///   file also receives info-level logs
///
/// Returns the guard of the file writer, which must be kept alive for the
/// duration of the program to ensure logs are flushed.
pub fn setup_logging(args: &Args, config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    let stderr_directive = if args.debug {
        "namebuster=debug"
    } else {
        "namebuster=warn"
    };
    let stderr_layer = fmt::Layer::new()
        .with_writer(stderr)
        .with_target(false)
        .with_filter(build_filter(stderr_directive)?);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    let Some(log_file_path) = custom_log_path else {
        registry.init();
        return Ok(None);
    };

    let (log_dir, log_file_name) = split_log_file_path(log_file_path);

    // Create log directory if it doesn't exist
    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_directive = if args.debug {
        "namebuster=debug"
    } else {
        "namebuster=info"
    };
    registry
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(build_filter(file_directive)?),
        )
        .init();

    tracing::info!("Logs are being written to: {log_dir}/{log_file_name}");
    Ok(Some(guard))
}
