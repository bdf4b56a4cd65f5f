use crate::cli::Args;
use crate::config::Config;
use crate::constants::{NO_USERNAMES_MESSAGE, USAGE, USAGE_EXIT_CODE};
use crate::error::AppError;
use crate::generator::generate;
use crate::input::collect_names;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Applies command line overrides on top of the loaded config.
///
/// Returns an error if the resulting config is invalid.
pub fn apply_args(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(timeout) = args.timeout {
        config.http_timeout_seconds = timeout;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
    config.validate()
}

/// Writes the usage text when there is nothing to do.
///
/// Returns the exit code the process should end with, or `None` when the
/// arguments carry an input or a command.
pub fn usage_if_no_input<W: Write>(args: &Args, out: &mut W) -> io::Result<Option<i32>> {
    if args.input.is_empty() && !args.list_config {
        out.write_all(USAGE.as_bytes())?;
        out.flush()?;
        return Ok(Some(USAGE_EXIT_CODE));
    }
    Ok(None)
}

/// Resolves the input into names and generates all candidates for them.
pub async fn generate_from_input(input: &str, config: &Config) -> Vec<String> {
    let names = collect_names(input, config).await;
    let candidates = generate(&names);
    info!(
        "Generated {} candidates from {} names",
        candidates.len(),
        names.len()
    );
    candidates
}

/// Writes one candidate per line, or the fixed message when there are none.
pub fn write_candidates<W: Write>(out: &mut W, candidates: &[String]) -> io::Result<()> {
    if candidates.is_empty() {
        writeln!(out, "{NO_USERNAMES_MESSAGE}")?;
    } else {
        for candidate in candidates {
            writeln!(out, "{candidate}")?;
        }
    }
    out.flush()
}

/// Handles the default command: generate and print candidates for the input.
pub async fn handle_generate_command(input: &str, config: &Config) -> Result<(), AppError> {
    let candidates = generate_from_input(input, config).await;
    let mut out = BufWriter::new(io::stdout().lock());
    write_candidates(&mut out, &candidates)?;
    Ok(())
}
