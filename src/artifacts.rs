use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::contracts::ContractId;
use crate::error::{DeploymentError, Result};

/// A compiled contract that is ready to be deployed.
#[derive(Debug, Clone)]
pub struct Artifact {
	pub contract_name: String,
	pub source_name: String,
	/// Creation bytecode, sent as-is as deployment calldata.
	pub bytecode: Vec<u8>,
	pub path: PathBuf,
}

impl Artifact {
	pub fn fully_qualified_name(&self) -> String {
		format!("{}:{}", self.source_name, self.contract_name)
	}
}

/// An artifact file found on disk, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntry {
	pub contract_name: String,
	pub source_name: String,
	pub path: PathBuf,
}

impl ArtifactEntry {
	pub fn fully_qualified_name(&self) -> String {
		format!("{}:{}", self.source_name, self.contract_name)
	}
}

/// Compiled artifacts laid out as `<source>.sol/<Contract>.json`.
///
/// Both Hardhat (`artifacts/contracts/Foo.sol/Foo.json`, bytecode as a hex
/// string) and Foundry (`out/Foo.sol/Foo.json`, bytecode under `object`)
/// layouts are understood.  Debug files and `build-info/` are skipped.
pub struct ArtifactStore {
	root: PathBuf,
}

impl ArtifactStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Every artifact under the root, sorted by fully qualified name.
	pub fn list(&self) -> Result<Vec<ArtifactEntry>> {
		if !self.root.is_dir() {
			return Err(DeploymentError::Io(std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("artifacts directory {} does not exist", self.root.display()),
			)));
		}

		let mut entries = Vec::new();
		collect_entries(&self.root, &self.root, &mut entries)?;
		entries.sort_by_key(ArtifactEntry::fully_qualified_name);
		Ok(entries)
	}

	/// Load the single artifact matching `id`.
	///
	/// A bare name that matches artifacts from more than one source file is
	/// an error; the caller has to qualify it.
	pub fn find(&self, id: &ContractId) -> Result<Artifact> {
		let mut matches: Vec<ArtifactEntry> = self
			.list()?
			.into_iter()
			.filter(|e| e.contract_name == id.contract_name())
			.filter(|e| id.source_name().map_or(true, |s| e.source_name == s))
			.collect();

		match matches.len() {
			0 => Err(DeploymentError::ArtifactNotFound {
				name: id.to_string(),
			}),
			1 => {
				let entry = matches.remove(0);
				debug!(contract = %id, path = %entry.path.display(), "resolved artifact");
				load_artifact(entry, id)
			}
			_ => Err(DeploymentError::AmbiguousArtifact {
				name: id.to_string(),
				candidates: matches.iter().map(ArtifactEntry::fully_qualified_name).collect(),
			}),
		}
	}
}

// -- Private helpers --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
	source_name: Option<String>,
	bytecode: Option<RawBytecode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
	Hex(String),
	Object { object: String },
}

impl RawBytecode {
	fn as_hex(&self) -> &str {
		match self {
			Self::Hex(s) => s,
			Self::Object { object } => object,
		}
	}
}

fn collect_entries(root: &Path, dir: &Path, out: &mut Vec<ArtifactEntry>) -> Result<()> {
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		let file_name = path
			.file_name()
			.and_then(|n| n.to_str())
			.unwrap_or_default()
			.to_owned();

		if path.is_dir() {
			if file_name != "build-info" {
				collect_entries(root, &path, out)?;
			}
			continue;
		}

		if !file_name.ends_with(".json") || file_name.ends_with(".dbg.json") {
			continue;
		}

		// Only files inside a `<source>.sol` directory are contract artifacts.
		let Some(parent) = path.parent() else { continue };
		if parent.extension().and_then(|e| e.to_str()) != Some("sol") {
			continue;
		}

		let contract_name = file_name.trim_end_matches(".json").to_owned();
		let source_name = parent
			.strip_prefix(root)
			.unwrap_or(parent)
			.components()
			.map(|c| c.as_os_str().to_string_lossy())
			.collect::<Vec<_>>()
			.join("/");

		out.push(ArtifactEntry {
			contract_name,
			source_name,
			path,
		});
	}
	Ok(())
}

fn load_artifact(entry: ArtifactEntry, id: &ContractId) -> Result<Artifact> {
	let invalid = |reason: String| DeploymentError::InvalidArtifact {
		path: entry.path.clone(),
		reason,
	};

	let content = fs::read_to_string(&entry.path)?;
	let raw: RawArtifact = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;

	let hex_str = raw
		.bytecode
		.as_ref()
		.map(RawBytecode::as_hex)
		.ok_or_else(|| invalid("no bytecode field".into()))?;
	let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);

	if hex_str.is_empty() {
		return Err(DeploymentError::NotDeployable {
			name: id.to_string(),
			reason: "artifact has no bytecode (abstract contract or interface)".into(),
		});
	}
	// Unlinked libraries are left as `__$<hash>$__` placeholders by solc.
	if hex_str.contains("__") {
		return Err(DeploymentError::NotDeployable {
			name: id.to_string(),
			reason: "bytecode references unlinked libraries".into(),
		});
	}

	let bytecode = hex::decode(hex_str).map_err(|e| invalid(format!("bad bytecode hex: {e}")))?;

	Ok(Artifact {
		contract_name: entry.contract_name,
		source_name: raw.source_name.unwrap_or(entry.source_name),
		bytecode,
		path: entry.path,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn write(root: &Path, rel: &str, body: serde_json::Value) {
		let path = root.join(rel);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, body.to_string()).unwrap();
	}

	fn id(s: &str) -> ContractId {
		s.parse().unwrap()
	}

	#[test]
	fn hardhat_layout_resolves() {
		let dir = tempfile::tempdir().unwrap();
		write(
			dir.path(),
			"contracts/Token.sol/Token.json",
			serde_json::json!({
				"contractName": "Token",
				"sourceName": "contracts/Token.sol",
				"bytecode": "0x6080604052"
			}),
		);
		write(
			dir.path(),
			"contracts/Token.sol/Token.dbg.json",
			serde_json::json!({ "buildInfo": "../../build-info/abc.json" }),
		);
		write(dir.path(), "build-info/abc.json", serde_json::json!({}));

		let store = ArtifactStore::new(dir.path());
		assert_eq!(store.list().unwrap().len(), 1);

		let artifact = store.find(&id("Token")).unwrap();
		assert_eq!(artifact.bytecode, vec![0x60, 0x80, 0x60, 0x40, 0x52]);
		assert_eq!(artifact.fully_qualified_name(), "contracts/Token.sol:Token");
	}

	#[test]
	fn foundry_layout_resolves() {
		let dir = tempfile::tempdir().unwrap();
		write(
			dir.path(),
			"Vault.sol/Vault.json",
			serde_json::json!({ "bytecode": { "object": "0x00ff" } }),
		);

		let artifact = ArtifactStore::new(dir.path()).find(&id("Vault")).unwrap();
		assert_eq!(artifact.bytecode, vec![0x00, 0xff]);
		assert_eq!(artifact.source_name, "Vault.sol");
	}

	#[test]
	fn unknown_name_is_not_found() {
		let dir = tempfile::tempdir().unwrap();
		write(
			dir.path(),
			"contracts/Token.sol/Token.json",
			serde_json::json!({ "bytecode": "0x00" }),
		);

		let err = ArtifactStore::new(dir.path()).find(&id("Missing")).unwrap_err();
		assert!(matches!(err, DeploymentError::ArtifactNotFound { name } if name == "Missing"));
	}

	#[test]
	fn duplicate_names_need_qualification() {
		let dir = tempfile::tempdir().unwrap();
		let body = serde_json::json!({ "bytecode": "0x00" });
		write(dir.path(), "contracts/a/Lib.sol/Lib.json", body.clone());
		write(dir.path(), "contracts/b/Lib.sol/Lib.json", body);

		let store = ArtifactStore::new(dir.path());
		match store.find(&id("Lib")).unwrap_err() {
			DeploymentError::AmbiguousArtifact { candidates, .. } => {
				assert_eq!(
					candidates,
					vec!["contracts/a/Lib.sol:Lib", "contracts/b/Lib.sol:Lib"]
				);
			}
			other => panic!("unexpected error: {other}"),
		}

		let artifact = store.find(&id("contracts/b/Lib.sol:Lib")).unwrap();
		assert_eq!(artifact.source_name, "contracts/b/Lib.sol");
	}

	#[test]
	fn interfaces_and_unlinked_bytecode_are_not_deployable() {
		let dir = tempfile::tempdir().unwrap();
		write(
			dir.path(),
			"contracts/IToken.sol/IToken.json",
			serde_json::json!({ "bytecode": "0x" }),
		);
		write(
			dir.path(),
			"contracts/Linked.sol/Linked.json",
			serde_json::json!({ "bytecode": "0x6080__$1234567890abcdef$__6040" }),
		);

		let store = ArtifactStore::new(dir.path());
		assert!(matches!(
			store.find(&id("IToken")),
			Err(DeploymentError::NotDeployable { .. })
		));
		assert!(matches!(
			store.find(&id("Linked")),
			Err(DeploymentError::NotDeployable { .. })
		));
	}

	#[test]
	fn missing_root_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let store = ArtifactStore::new(dir.path().join("nope"));
		assert!(store.list().is_err());
	}
}
