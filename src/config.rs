use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::deployer::ConfirmationPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
	/// Contracts to deploy, in order.  Built-in list when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contracts: Option<Vec<String>>,
	pub network: NetworkConfig,
	pub artifacts: ArtifactsConfig,
	#[serde(default)]
	pub deployer: DeployerConfig,
	pub confirmation: ConfirmationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub default: String,
	pub localhost_rpc: String,
	pub hardhat_rpc: String,
	pub sepolia_rpc: String,
	pub mainnet_rpc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
	pub dir: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployerConfig {
	/// Sending account.  The node's first account when unset.
	pub from: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationConfig {
	pub confirmations: u64,
	pub poll_interval_ms: u64,
	pub timeout_secs: u64,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			contracts: None,
			network: NetworkConfig {
				default: "localhost".into(),
				localhost_rpc: "http://127.0.0.1:8545".into(),
				hardhat_rpc: "http://127.0.0.1:8545".into(),
				sepolia_rpc: "https://ethereum-sepolia-rpc.publicnode.com".into(),
				mainnet_rpc: "https://ethereum-rpc.publicnode.com".into(),
			},
			artifacts: ArtifactsConfig {
				dir: PathBuf::from("artifacts"),
			},
			deployer: DeployerConfig::default(),
			confirmation: ConfirmationConfig {
				confirmations: 1,
				poll_interval_ms: 500,
				timeout_secs: 120,
			},
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.deploy-runner/).
	pub fn dir() -> anyhow::Result<PathBuf> {
		dirs::home_dir()
			.map(|home| home.join(".deploy-runner"))
			.ok_or_else(|| anyhow::anyhow!("could not determine home directory"))
	}

	/// Default path to the config file.
	pub fn path() -> anyhow::Result<PathBuf> {
		Ok(Self::dir()?.join("config.toml"))
	}

	/// Load config from `path`, falling back to defaults if no file exists.
	pub fn load_from(path: &Path) -> anyhow::Result<Self> {
		if path.exists() {
			let content = std::fs::read_to_string(path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Persist the config to `path`, creating the directory if needed.
	pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Return the RPC URL for the given network name.
	pub fn rpc_url(&self, network: &str) -> &str {
		match network {
			"hardhat" => &self.network.hardhat_rpc,
			"sepolia" => &self.network.sepolia_rpc,
			"mainnet" => &self.network.mainnet_rpc,
			_ => &self.network.localhost_rpc,
		}
	}

	pub fn confirmation_policy(&self) -> ConfirmationPolicy {
		ConfirmationPolicy {
			confirmations: self.confirmation.confirmations.max(1),
			poll_interval: Duration::from_millis(self.confirmation.poll_interval_ms),
			timeout: Duration::from_secs(self.confirmation.timeout_secs),
		}
	}
}
