use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
	name = "deploy-runner",
	about = "Deploy compiled contracts one by one and print their addresses.",
	version
)]
pub struct Cli {
	/// Network to deploy to.
	#[arg(long, global = true)]
	pub network: Option<Network>,

	/// Override RPC endpoint URL.
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	/// Config file to use instead of ~/.deploy-runner/config.toml.
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum Network {
	Localhost,
	Hardhat,
	Sepolia,
	Mainnet,
}

impl Network {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Localhost => "localhost",
			Self::Hardhat => "hardhat",
			Self::Sepolia => "sepolia",
			Self::Mainnet => "mainnet",
		}
	}
}

#[derive(Subcommand)]
pub enum Command {
	/// Deploy every contract in order and print the address summary.
	Deploy(DeployArgs),

	/// List compiled artifacts and check that the configured contracts resolve.
	Artifacts(ArtifactsArgs),

	/// Inspect or create the config file.
	Config {
		#[command(subcommand)]
		command: ConfigCommand,
	},
}

#[derive(Args)]
pub struct DeployArgs {
	/// Comma-separated contract names, replacing the configured list.
	#[arg(long, value_delimiter = ',')]
	pub contracts: Option<Vec<String>>,

	/// Directory holding compiled artifacts.
	#[arg(long)]
	pub artifacts: Option<PathBuf>,

	/// Sending account (must be unlocked on the node).
	#[arg(long)]
	pub from: Option<String>,

	/// Blocks to wait for, counting the inclusion block.
	#[arg(long)]
	pub confirmations: Option<u64>,

	/// Seconds to wait for each deployment to confirm.
	#[arg(long)]
	pub timeout: Option<u64>,
}

#[derive(Args)]
pub struct ArtifactsArgs {
	/// Directory holding compiled artifacts.
	#[arg(long)]
	pub artifacts: Option<PathBuf>,

	/// Comma-separated contract names to check.
	#[arg(long, value_delimiter = ',')]
	pub contracts: Option<Vec<String>>,
}

// -- Config subcommands --

#[derive(Subcommand)]
pub enum ConfigCommand {
	/// Print the effective configuration.
	Show,

	/// Write the default configuration if no file exists yet.
	Init {
		/// Overwrite an existing file.
		#[arg(long)]
		force: bool,
	},
}
