use anyhow::Result;

use crate::artifacts::ArtifactStore;
use crate::cli::{ArtifactsArgs, Cli};
use crate::commands::load_config;
use crate::contracts;

/// Print every artifact found, then check each configured contract resolves
/// to exactly one deployable artifact.  Sends nothing to the network.
pub fn run(cli: &Cli, args: &ArtifactsArgs) -> Result<()> {
	let config = load_config(cli)?;
	let dir = args
		.artifacts
		.clone()
		.unwrap_or_else(|| config.artifacts.dir.clone());
	let store = ArtifactStore::new(dir);

	let entries = store.list()?;
	println!("{} artifact(s) in {}", entries.len(), store.root().display());
	for entry in &entries {
		println!("  {}", entry.fully_qualified_name());
	}

	let ids = contracts::resolve_list(args.contracts.as_deref(), config.contracts.as_deref())?;
	println!();

	let mut failed = 0u32;
	for id in &ids {
		match store.find(id) {
			Ok(artifact) => println!("ok    {id} ({} bytes)", artifact.bytecode.len()),
			Err(e) => {
				failed += 1;
				println!("FAIL  {e}");
			}
		}
	}

	if failed > 0 {
		anyhow::bail!("{failed} of {} contract(s) cannot be deployed", ids.len());
	}
	println!("\nAll {} contract(s) resolve.", ids.len());
	Ok(())
}
