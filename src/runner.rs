use std::io::Write;

use tracing::{debug, info};

use crate::contracts::ContractId;
use crate::deployer::ArtifactResolver;
use crate::error::Result;
use crate::ledger::DeploymentLedger;

/// Deploy `ids` one after another and collect their addresses.
///
/// Each contract is resolved, deployed and confirmed before the next one is
/// touched.  The first failure aborts the run and the partial ledger is
/// dropped.  A progress line per confirmed contract is written to `out`.
pub async fn run<W: Write>(
	resolver: &dyn ArtifactResolver,
	ids: &[ContractId],
	out: &mut W,
) -> Result<DeploymentLedger> {
	let mut ledger = DeploymentLedger::new();
	let total = ids.len();

	for (i, id) in ids.iter().enumerate() {
		debug!(contract = %id, step = i + 1, total, "resolving factory");
		let factory = resolver.get_factory(id).await?;

		let pending = factory.deploy().await?;
		info!(contract = %id, tx_hash = %pending.tx_hash(), "waiting for confirmation");

		let confirmed = pending.await_confirmation().await?;
		info!(
			contract = %id,
			address = %confirmed.address,
			block = confirmed.block_number,
			"deployment confirmed"
		);

		ledger.record(id.as_str(), confirmed.address.to_string());
		writeln!(out, "{id} deployed to: {}", confirmed.address)?;
	}

	Ok(ledger)
}
