use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{DispositionArg, OutputFormat, SurfaceArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `omnibox` binary.
#[derive(Parser, Debug)]
#[command(
    name = "omnibox",
    version,
    long_version = long_version(),
    about = "Address-bar style search suggestions over bookmarks and shortcuts",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "INPUT",
        help = "Inputs typed into the omnibox, in order (default: read lines from stdin)"
    )]
    pub(crate) inputs: Vec<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "OMNIBOX_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "CONTENT",
        help = "Enter this suggestion content after the last input (default: none)"
    )]
    pub(crate) open: Option<String>,
    #[arg(
        short = 'd',
        long,
        value_enum,
        default_value_t = DispositionArg::CurrentTab,
        help = "Where an entered suggestion opens"
    )]
    pub(crate) disposition: DispositionArg,
    #[arg(
        short = 'm',
        long = "max-suggestions",
        value_name = "NUM",
        help = "Suggestions per page (default: 8)"
    )]
    pub(crate) max_suggestions: Option<usize>,
    #[arg(
        long = "page-turner",
        value_name = "CHAR",
        help = "Sigil appended to the input to page down (default: -)"
    )]
    pub(crate) page_turner: Option<String>,
    #[arg(
        short = 's',
        long,
        value_enum,
        help = "Surface the suggestions are produced for (default: webpage)"
    )]
    pub(crate) surface: Option<SurfaceArg>,
    #[arg(
        long = "no-hint",
        help = "Do not report the name of the matched shortcut (default: disabled)"
    )]
    pub(crate) no_hint: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "FILTER",
        env = "OMNIBOX_LOG",
        help = "Log filter written to stderr (default: RUST_LOG or warn)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print suggestions"
    )]
    pub(crate) output: OutputFormat,
}
