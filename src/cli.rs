use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Username candidate generator
///
/// Builds casing, initial and separator permutations of a person's name.
/// The input is treated as:
/// - a web page to scrape for "First Last" names if it starts with http:// or https://
/// - a file with one name per line if such a path exists
/// - a literal name otherwise
///
/// Candidates are printed one per line to stdout; logs go to stderr.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Name, URL or file. Multiple words are joined with single spaces,
    /// so quoting "John Doe" is optional. Everything after the first word
    /// is part of the input, including words starting with '-'.
    #[arg(
        value_name = "TEXT|URL|FILE",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub input: Vec<String>,

    /// HTTP timeout in seconds when fetching a URL. Overrides the config file.
    #[arg(long = "timeout", short = 't', value_name = "SECONDS", help_heading = "Network")]
    pub timeout: Option<u64>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show debug logs on stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Also write logs to this file (rotated daily).
    /// If not provided, the config file's log_file_path is used when set.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// All positional arguments joined by single spaces, or `None` if there are none.
    pub fn joined_input(&self) -> Option<String> {
        if self.input.is_empty() {
            None
        } else {
            Some(self.input.join(" "))
        }
    }
}
