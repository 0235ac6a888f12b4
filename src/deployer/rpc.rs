use std::sync::Arc;

use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, Bytes, B256};
use tokio::sync::OnceCell;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use super::{
	ArtifactResolver, ConfirmationPolicy, ConfirmedDeployment, ContractFactory, PendingDeployment,
};
use crate::artifacts::ArtifactStore;
use crate::contracts::ContractId;
use crate::error::{DeploymentError, Result};
use crate::rpc::RpcClient;

/// Deploys artifacts from disk through a JSON-RPC node that holds the
/// sending account.
pub struct RpcArtifactResolver {
	store: ArtifactStore,
	rpc: Arc<RpcClient>,
	sender: OnceCell<Address>,
	policy: ConfirmationPolicy,
}

impl RpcArtifactResolver {
	/// Nothing is sent to the node until the first contract is resolved.
	pub fn new(
		store: ArtifactStore,
		rpc: RpcClient,
		from: Option<Address>,
		policy: ConfirmationPolicy,
	) -> Self {
		Self {
			store,
			rpc: Arc::new(rpc),
			sender: OnceCell::new_with(from),
			policy,
		}
	}

	/// Sending account.  Without an explicit `from` the node's first account
	/// is looked up once and reused.
	pub async fn sender(&self) -> Result<Address> {
		self.sender
			.get_or_try_init(|| async {
				let from = self
					.rpc
					.accounts()
					.await?
					.into_iter()
					.next()
					.ok_or_else(|| DeploymentError::Rpc("node exposes no accounts".into()))?;
				info!(%from, rpc = self.rpc.url(), "deploying from node account");
				Ok::<_, DeploymentError>(from)
			})
			.await
			.copied()
	}
}

#[async_trait::async_trait]
impl ArtifactResolver for RpcArtifactResolver {
	async fn get_factory(&self, id: &ContractId) -> Result<Box<dyn ContractFactory>> {
		let artifact = self.store.find(id)?;
		debug!(
			contract = %id,
			bytes = artifact.bytecode.len(),
			source = %artifact.source_name,
			"loaded bytecode"
		);

		Ok(Box::new(RpcFactory {
			name: id.to_string(),
			bytecode: Bytes::from(artifact.bytecode),
			rpc: Arc::clone(&self.rpc),
			from: self.sender().await?,
			policy: self.policy,
		}))
	}
}

pub struct RpcFactory {
	name: String,
	bytecode: Bytes,
	rpc: Arc<RpcClient>,
	from: Address,
	policy: ConfirmationPolicy,
}

#[async_trait::async_trait]
impl ContractFactory for RpcFactory {
	async fn deploy(&self) -> Result<Box<dyn PendingDeployment>> {
		let tx_hash = self
			.rpc
			.send_deployment(self.from, self.bytecode.clone())
			.await
			.map_err(|e| DeploymentError::DeploymentSubmission {
				name: self.name.clone(),
				reason: reason(e),
			})?;
		debug!(contract = %self.name, %tx_hash, "deployment submitted");

		Ok(Box::new(RpcPendingDeployment {
			name: self.name.clone(),
			tx_hash,
			rpc: Arc::clone(&self.rpc),
			policy: self.policy,
		}))
	}
}

pub struct RpcPendingDeployment {
	name: String,
	tx_hash: B256,
	rpc: Arc<RpcClient>,
	policy: ConfirmationPolicy,
}

impl RpcPendingDeployment {
	fn unconfirmed(&self, reason: impl Into<String>) -> DeploymentError {
		DeploymentError::ConfirmationTimeout {
			name: self.name.clone(),
			tx_hash: self.tx_hash,
			reason: reason.into(),
		}
	}
}

#[async_trait::async_trait]
impl PendingDeployment for RpcPendingDeployment {
	fn tx_hash(&self) -> B256 {
		self.tx_hash
	}

	async fn await_confirmation(self: Box<Self>) -> Result<ConfirmedDeployment> {
		let deadline = Instant::now().checked_add(self.policy.timeout);

		loop {
			let receipt = self
				.rpc
				.receipt(self.tx_hash)
				.await
				.map_err(|e| self.unconfirmed(reason(e)))?;

			// A receipt without a block number is still pending.
			if let Some((receipt, block_number)) =
				receipt.and_then(|r| r.block_number.map(|block| (r, block)))
			{
				if !receipt.status() {
					return Err(self.unconfirmed("transaction reverted"));
				}

				// The receipt's own block counts as the first confirmation.
				let depth = if self.policy.confirmations > 1 {
					let tip = self
						.rpc
						.block_number()
						.await
						.map_err(|e| self.unconfirmed(reason(e)))?;
					tip.saturating_sub(block_number) + 1
				} else {
					1
				};

				if depth >= self.policy.confirmations {
					let address = receipt
						.contract_address
						.ok_or_else(|| self.unconfirmed("receipt has no contract address"))?;
					return Ok(ConfirmedDeployment {
						address,
						tx_hash: receipt.transaction_hash,
						block_number,
					});
				}
				debug!(
					contract = %self.name,
					depth,
					required = self.policy.confirmations,
					"waiting for confirmations"
				);
			}

			if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
				return Err(self.unconfirmed(format!(
					"not final after {}s",
					self.policy.timeout.as_secs_f64()
				)));
			}
			sleep(self.policy.poll_interval).await;
		}
	}
}

fn reason(err: DeploymentError) -> String {
	match err {
		DeploymentError::Rpc(msg) => msg,
		other => other.to_string(),
	}
}
