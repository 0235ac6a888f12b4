//! Integration tests that hit a local development node.
//!
//! These are marked `#[ignore]` by default because they need a running
//! Hardhat or Anvil node on 127.0.0.1:8545 with unlocked accounts.  Run
//! them explicitly with:
//!
//!   cargo test --test integration -- --ignored

use deploy_runner::artifacts::ArtifactStore;
use deploy_runner::deployer::rpc::RpcArtifactResolver;
use deploy_runner::deployer::ConfirmationPolicy;
use deploy_runner::rpc::RpcClient;
use deploy_runner::runner;

const LOCAL_RPC: &str = "http://127.0.0.1:8545";

/// Init code for a ten-byte runtime that returns a zero word.
const TRIVIAL_INIT_CODE: &str = "0x600a600c600039600a6000f3600060005260206000f3";

fn artifacts_with(names: &[&str]) -> tempfile::TempDir {
	let dir = tempfile::tempdir().unwrap();
	for name in names {
		let path = dir.path().join(format!("contracts/{name}.sol"));
		std::fs::create_dir_all(&path).unwrap();
		std::fs::write(
			path.join(format!("{name}.json")),
			serde_json::json!({
				"contractName": name,
				"sourceName": format!("contracts/{name}.sol"),
				"bytecode": TRIVIAL_INIT_CODE,
			})
			.to_string(),
		)
		.unwrap();
	}
	dir
}

#[tokio::test]
#[ignore]
async fn node_has_accounts_and_blocks() {
	let rpc = RpcClient::new(LOCAL_RPC).unwrap();
	let accounts = rpc.accounts().await.expect("eth_accounts failed");
	assert!(!accounts.is_empty(), "dev node should expose unlocked accounts");
	rpc.block_number().await.expect("eth_blockNumber failed");
}

#[tokio::test]
#[ignore]
async fn deploys_in_order_with_fresh_addresses() {
	let names = ["TokenA", "TokenB"];
	let dir = artifacts_with(&names);
	let ids: Vec<_> = names.iter().map(|n| n.parse().unwrap()).collect();

	let resolver = RpcArtifactResolver::new(
		ArtifactStore::new(dir.path()),
		RpcClient::new(LOCAL_RPC).unwrap(),
		None,
		ConfirmationPolicy::default(),
	);

	let first = runner::run(&resolver, &ids, &mut std::io::sink())
		.await
		.expect("first run failed");
	let second = runner::run(&resolver, &ids, &mut std::io::sink())
		.await
		.expect("second run failed");

	let order: Vec<_> = first.iter().map(|(n, _)| n).collect();
	assert_eq!(order, names);
	for name in names {
		assert_ne!(first.get(name), second.get(name));
	}
}
