mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli, parse_surface};
pub(crate) use output::{TerminalNavigator, TerminalRender, print_enter_outcome};
