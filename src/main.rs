use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deploy_runner::cli::{Cli, Command};
use deploy_runner::commands;

#[tokio::main]
async fn main() -> Result<()> {
	init_logging();
	let cli = Cli::parse();

	match &cli.command {
		Command::Deploy(args) => commands::deploy::run(&cli, args, &mut std::io::stdout()).await,
		Command::Artifacts(args) => commands::artifacts::run(&cli, args),
		Command::Config { command } => commands::config::run(&cli, command),
	}
}

/// Logs go to stderr so stdout carries only progress lines and the summary.
/// Verbosity follows `RUST_LOG`.
fn init_logging() {
	use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("deploy_runner=warn"));

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.compact(),
		)
		.with(env_filter)
		.init();
}
