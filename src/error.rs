use std::path::PathBuf;

use alloy_primitives::B256;

pub type Result<T> = std::result::Result<T, DeploymentError>;

/// Everything that can abort a deployment run.
///
/// None of these are recovered from: the runner stops at the first one and
/// the process exits non-zero regardless of the variant.
#[derive(thiserror::Error, Debug)]
pub enum DeploymentError {
	#[error("invalid contract name {name:?}: {reason}")]
	InvalidContractName { name: String, reason: &'static str },

	#[error("artifact for contract {name} not found")]
	ArtifactNotFound { name: String },

	#[error(
		"multiple artifacts match contract {name}, use a fully qualified name: {}",
		.candidates.join(", ")
	)]
	AmbiguousArtifact {
		name: String,
		candidates: Vec<String>,
	},

	#[error("contract {name} cannot be deployed: {reason}")]
	NotDeployable { name: String, reason: String },

	#[error("invalid artifact {path}: {reason}")]
	InvalidArtifact { path: PathBuf, reason: String },

	#[error("deployment of {name} was rejected: {reason}")]
	DeploymentSubmission { name: String, reason: String },

	#[error("deployment of {name} (tx {tx_hash}) was not confirmed: {reason}")]
	ConfirmationTimeout {
		name: String,
		tx_hash: B256,
		reason: String,
	},

	#[error("RPC error: {0}")]
	Rpc(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
