use std::io::Write;
use std::time::Duration;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use tracing::info;

use crate::artifacts::ArtifactStore;
use crate::cli::{Cli, DeployArgs};
use crate::commands::{load_config, resolve_rpc};
use crate::contracts;
use crate::deployer::rpc::RpcArtifactResolver;
use crate::rpc::RpcClient;
use crate::runner;

/// Deploy the configured contracts, writing progress and the address
/// summary to `out`.  Nothing past the last confirmed contract is written
/// when a deployment fails.
pub async fn run<W: Write>(cli: &Cli, args: &DeployArgs, out: &mut W) -> Result<()> {
	let config = load_config(cli)?;
	let rpc_url = resolve_rpc(cli, &config);
	let ids = contracts::resolve_list(args.contracts.as_deref(), config.contracts.as_deref())?;

	let mut policy = config.confirmation_policy();
	if let Some(n) = args.confirmations {
		policy.confirmations = n.max(1);
	}
	if let Some(secs) = args.timeout {
		policy.timeout = Duration::from_secs(secs);
	}

	let artifacts_dir = args
		.artifacts
		.clone()
		.unwrap_or_else(|| config.artifacts.dir.clone());
	let from = args
		.from
		.as_deref()
		.or(config.deployer.from.as_deref())
		.map(|addr| {
			addr.parse::<Address>()
				.with_context(|| format!("invalid sender address {addr}"))
		})
		.transpose()?;

	info!(rpc = %rpc_url, contracts = ids.len(), artifacts = %artifacts_dir.display(), "starting deployment");

	let resolver = RpcArtifactResolver::new(
		ArtifactStore::new(artifacts_dir),
		RpcClient::new(&rpc_url)?,
		from,
		policy,
	);

	writeln!(out, "Deploying contracts...\n")?;
	let ledger = runner::run(&resolver, &ids, out).await?;

	writeln!(out, "\nAll contracts deployed.")?;
	writeln!(out, "\nContract addresses for reference:\n{}", ledger.to_pretty_json())?;
	Ok(())
}
