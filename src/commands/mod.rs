pub mod artifacts;
pub mod config;
pub mod deploy;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;

/// Config file path from CLI flag or the default location.
pub fn config_path(cli: &Cli) -> Result<PathBuf> {
	match &cli.config {
		Some(path) => Ok(path.clone()),
		None => Config::path(),
	}
}

pub fn load_config(cli: &Cli) -> Result<Config> {
	Config::load_from(&config_path(cli)?)
}

/// Network name from CLI flag or config.
pub fn resolve_network(cli: &Cli, config: &Config) -> String {
	cli.network
		.as_ref()
		.map(|n| n.as_str().to_owned())
		.unwrap_or_else(|| config.network.default.clone())
}

/// Resolve the RPC URL from CLI flag or config.
pub fn resolve_rpc(cli: &Cli, config: &Config) -> String {
	cli.rpc_url
		.clone()
		.unwrap_or_else(|| config.rpc_url(&resolve_network(cli, config)).to_owned())
}
