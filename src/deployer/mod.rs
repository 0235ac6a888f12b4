pub mod rpc;

use std::time::Duration;

use alloy_primitives::{Address, B256};

use crate::contracts::ContractId;
use crate::error::Result;

/// Resolves contract names to something that can deploy them.
#[async_trait::async_trait]
pub trait ArtifactResolver: Send + Sync {
	/// Fails with `ArtifactNotFound` when no compiled artifact carries `id`.
	async fn get_factory(&self, id: &ContractId) -> Result<Box<dyn ContractFactory>>;
}

/// Deploys new instances of one compiled contract.
#[async_trait::async_trait]
pub trait ContractFactory: Send + Sync {
	/// Submit a deployment with no constructor arguments.
	async fn deploy(&self) -> Result<Box<dyn PendingDeployment>>;
}

/// A submitted deployment transaction that has not been confirmed yet.
#[async_trait::async_trait]
pub trait PendingDeployment: Send {
	fn tx_hash(&self) -> B256;

	/// Wait until the transaction is final and return where the contract
	/// ended up.
	async fn await_confirmation(self: Box<Self>) -> Result<ConfirmedDeployment>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDeployment {
	pub address: Address,
	pub tx_hash: B256,
	pub block_number: u64,
}

/// How long and how deep to wait for a deployment receipt.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationPolicy {
	/// Blocks that must exist on top of (and including) the receipt's block.
	pub confirmations: u64,
	pub poll_interval: Duration,
	/// Per deployment.  A timeout past what the clock can represent never
	/// expires.
	pub timeout: Duration,
}

impl Default for ConfirmationPolicy {
	fn default() -> Self {
		Self {
			confirmations: 1,
			poll_interval: Duration::from_millis(500),
			timeout: Duration::from_secs(120),
		}
	}
}
