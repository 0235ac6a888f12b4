use std::fmt;
use std::str::FromStr;

use crate::error::{DeploymentError, Result};

/// Contracts deployed when neither the command line nor the config file
/// names any.  Order is deployment order.
pub static DEFAULT_CONTRACTS: &[&str] = &[
	"VulnerableToken",
	"ReentrancyDemo",
	"AccessControlTest",
	"DelegateCallExample",
	"MysteryLogic",
];

/// Name of a compiled contract artifact.
///
/// Either a bare contract name (`Token`) or a fully qualified one
/// (`contracts/Token.sol:Token`) for when several sources define a
/// contract with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractId(String);

impl ContractId {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The contract name without any source path.
	pub fn contract_name(&self) -> &str {
		match self.0.rsplit_once(':') {
			Some((_, name)) => name,
			None => &self.0,
		}
	}

	/// Source file for fully qualified names.
	pub fn source_name(&self) -> Option<&str> {
		self.0.rsplit_once(':').map(|(source, _)| source)
	}
}

impl FromStr for ContractId {
	type Err = DeploymentError;

	fn from_str(s: &str) -> Result<Self> {
		let invalid = |reason| DeploymentError::InvalidContractName {
			name: s.to_owned(),
			reason,
		};
		if s.is_empty() {
			return Err(invalid("must not be empty"));
		}
		if s.chars().any(char::is_whitespace) {
			return Err(invalid("contains whitespace"));
		}
		if let Some((source, name)) = s.rsplit_once(':') {
			if source.is_empty() || name.is_empty() {
				return Err(invalid("fully qualified names look like path/File.sol:Name"));
			}
		}
		Ok(Self(s.to_owned()))
	}
}

impl fmt::Display for ContractId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Pick the list to deploy: command line first, then config, then the
/// built-in defaults.
pub fn resolve_list(
	cli: Option<&[String]>,
	config: Option<&[String]>,
) -> Result<Vec<ContractId>> {
	match cli.or(config) {
		Some(names) => names
			.iter()
			.map(|n| n.trim())
			.filter(|n| !n.is_empty())
			.map(str::parse)
			.collect(),
		None => DEFAULT_CONTRACTS.iter().map(|n| n.parse()).collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_used_when_nothing_configured() {
		let ids = resolve_list(None, None).unwrap();
		let names: Vec<_> = ids.iter().map(ContractId::as_str).collect();
		assert_eq!(names, DEFAULT_CONTRACTS);
	}

	#[test]
	fn cli_overrides_config() {
		let cli = vec!["A".to_owned(), " B ".to_owned()];
		let config = vec!["C".to_owned()];
		let ids = resolve_list(Some(cli.as_slice()), Some(config.as_slice())).unwrap();
		let names: Vec<_> = ids.iter().map(ContractId::as_str).collect();
		assert_eq!(names, ["A", "B"]);

		let ids = resolve_list(None, Some(config.as_slice())).unwrap();
		assert_eq!(ids, vec!["C".parse::<ContractId>().unwrap()]);
	}

	#[test]
	fn explicit_empty_list_stays_empty() {
		let ids = resolve_list(Some(Vec::new().as_slice()), None).unwrap();
		assert!(ids.is_empty());
	}

	#[test]
	fn malformed_entry_fails_the_whole_list() {
		let cli = vec!["Token".to_owned(), "Bad Name".to_owned()];
		match resolve_list(Some(cli.as_slice()), None) {
			Err(DeploymentError::InvalidContractName { name, .. }) => assert_eq!(name, "Bad Name"),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn fully_qualified_names_split() {
		let id: ContractId = "contracts/tokens/Token.sol:Token".parse().unwrap();
		assert_eq!(id.contract_name(), "Token");
		assert_eq!(id.source_name(), Some("contracts/tokens/Token.sol"));

		let bare: ContractId = "Token".parse().unwrap();
		assert_eq!(bare.contract_name(), "Token");
		assert_eq!(bare.source_name(), None);
	}

	#[test]
	fn malformed_names_rejected() {
		assert!(matches!(
			"".parse::<ContractId>(),
			Err(DeploymentError::InvalidContractName { .. })
		));
		assert!("My Token".parse::<ContractId>().is_err());
		assert!(":Token".parse::<ContractId>().is_err());
		assert!("Token.sol:".parse::<ContractId>().is_err());
	}
}
