use anyhow::Result;

use crate::cli::{Cli, ConfigCommand};
use crate::commands::{config_path, load_config, resolve_network, resolve_rpc};
use crate::config::Config;

pub fn run(cli: &Cli, cmd: &ConfigCommand) -> Result<()> {
	match cmd {
		ConfigCommand::Show => show(cli),
		ConfigCommand::Init { force } => init(cli, *force),
	}
}

fn show(cli: &Cli) -> Result<()> {
	let path = config_path(cli)?;
	let config = load_config(cli)?;
	let source = if path.exists() { "file" } else { "defaults" };

	println!("Config ({source}): {}", path.display());
	println!("  Network:       {}", resolve_network(cli, &config));
	println!("  RPC:           {}", resolve_rpc(cli, &config));
	println!("  Artifacts:     {}", config.artifacts.dir.display());
	println!(
		"  From:          {}",
		config.deployer.from.as_deref().unwrap_or("first node account")
	);
	println!(
		"  Confirmations: {} (timeout {}s)",
		config.confirmation.confirmations, config.confirmation.timeout_secs
	);
	match &config.contracts {
		Some(list) => println!("  Contracts:     {}", list.join(", ")),
		None => println!("  Contracts:     built-in list"),
	}
	Ok(())
}

fn init(cli: &Cli, force: bool) -> Result<()> {
	let path = config_path(cli)?;
	if path.exists() && !force {
		anyhow::bail!(
			"config already exists at {}. Use --force to overwrite.",
			path.display()
		);
	}

	Config::default().save_to(&path)?;
	println!("Wrote default config to {}", path.display());
	Ok(())
}
