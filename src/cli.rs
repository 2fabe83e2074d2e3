use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

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

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print one slide and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || is_config_operation(args)
}

/// True when the invocation only reads or edits configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.new_log_file_path.is_some() || args.clear_log_file_path || args.list_config
}

/// Teletext Deck
///
/// Presents a slide deck full-screen in your terminal with teletext styling.
///
/// Slides in the deck file are separated by lines containing only `---`.
/// The first `# ` line of a slide is its title.
///
/// Controls:
/// - →, ↓, Space: next slide. ←, ↑: previous slide
/// - Home / End: first / last slide
/// - Mouse: swipe left/right, click the left or right quarter of the screen,
///   click an indicator dot or the prev/next buttons
/// - q or Esc: quit
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to the deck file to present
    #[arg(
        value_name = "DECK",
        required_unless_present_any = ["new_log_file_path", "clear_log_file_path", "list_config"]
    )]
    pub deck: Option<PathBuf>,

    /// Slide to start from (1-based)
    #[arg(long = "start", short = 's', default_value_t = 1, help_heading = "Display Options")]
    pub start: usize,

    /// Print the start slide once and exit. The output stays visible in terminal history.
    #[arg(short, long, help_heading = "Display Options")]
    pub once: bool,

    /// Override the transition duration in milliseconds for this run
    #[arg(long = "transition-ms", help_heading = "Display Options")]
    pub transition_ms: Option<u64>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which keeps the normal screen instead of the alternate screen.
    /// Logs are also written to stdout in non-interactive runs.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path.
    /// If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
