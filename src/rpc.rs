use alloy_primitives::{Address, Bytes, B256};
use alloy_provider::{Provider, ProviderBuilder, RootProvider};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_network::TransactionBuilder;
use tracing::debug;

use crate::error::{DeploymentError, Result};

/// Thin wrapper around an alloy HTTP provider.
///
/// Recommended fillers are disabled: the node is expected to hold the
/// deploying account unlocked (Hardhat and Anvil dev nodes do) and fills
/// gas and nonce itself, so deployments go out via `eth_sendTransaction`
/// and nothing is signed locally.
#[derive(Clone)]
pub struct RpcClient {
	provider: RootProvider,
	url: String,
}

impl RpcClient {
	pub fn new(url: &str) -> Result<Self> {
		let parsed = url
			.parse()
			.map_err(|e| DeploymentError::Rpc(format!("invalid RPC URL {url}: {e}")))?;
		let provider = ProviderBuilder::new()
			.disable_recommended_fillers()
			.connect_http(parsed);

		Ok(Self {
			provider,
			url: url.to_owned(),
		})
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub async fn block_number(&self) -> Result<u64> {
		self.provider
			.get_block_number()
			.await
			.map_err(|e| DeploymentError::Rpc(format!("eth_blockNumber: {e}")))
	}

	/// Accounts the node can send from.
	pub async fn accounts(&self) -> Result<Vec<Address>> {
		self.provider
			.get_accounts()
			.await
			.map_err(|e| DeploymentError::Rpc(format!("eth_accounts: {e}")))
	}

	/// Submit a contract-creation transaction and return its hash.
	pub async fn send_deployment(&self, from: Address, code: Bytes) -> Result<B256> {
		let tx = TransactionRequest::default()
			.from(from)
			.with_deploy_code(code);

		let pending = self
			.provider
			.send_transaction(tx)
			.await
			.map_err(|e| DeploymentError::Rpc(format!("eth_sendTransaction: {e}")))?;
		let tx_hash = *pending.tx_hash();
		debug!(%tx_hash, "deployment transaction accepted");
		Ok(tx_hash)
	}

	/// `None` while the transaction is still pending.
	pub async fn receipt(&self, tx_hash: B256) -> Result<Option<TransactionReceipt>> {
		self.provider
			.get_transaction_receipt(tx_hash)
			.await
			.map_err(|e| DeploymentError::Rpc(format!("eth_getTransactionReceipt: {e}")))
	}
}
