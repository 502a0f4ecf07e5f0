mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{CliArgs, parse_cli, print_enter_outcome};
use omnibox::logging;
use settings::ResolvedConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use workflow::OmniboxWorkflow;

#[tokio::main]
async fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.log_level.as_deref());

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_omnibox(&cli, resolved).await
}

/// Feed the inputs through the omnibox and print what happened.
async fn run_omnibox(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let inputs = if cli.inputs.is_empty() {
		read_stdin_lines().await?
	} else {
		cli.inputs.clone()
	};

	let workflow = OmniboxWorkflow::from_config(settings, cli.output)?;
	let open = cli
		.open
		.as_deref()
		.map(|content| (content, cli.disposition.into()));
	if let Some(outcome) = workflow.run(&inputs, open).await? {
		print_enter_outcome(cli.output, &outcome)?;
	}

	Ok(())
}

async fn read_stdin_lines() -> Result<Vec<String>> {
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut inputs = Vec::new();
	while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
		inputs.push(line);
	}
	Ok(inputs)
}
