use indexmap::IndexMap;
use serde::Serialize;

/// Contract name → deployed address for one run, in deployment order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeploymentLedger {
	entries: IndexMap<String, String>,
}

impl DeploymentLedger {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a confirmed deployment.  A name deployed twice keeps the
	/// position of its first deployment and the address of its latest.
	pub fn record(&mut self, name: impl Into<String>, address: impl Into<String>) {
		self.entries.insert(name.into(), address.into());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Two-space indented JSON object.
	pub fn to_pretty_json(&self) -> String {
		// A map of strings always serializes.
		serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "{}".into())
	}
}
