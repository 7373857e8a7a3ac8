//! Common types used throughout the feature flag store.

use serde::{Deserialize, Serialize};

// WorkspaceId //
//*************//
/// Opaque tenant-scoping identifier. Flags are always stored per workspace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(pub Box<str>);

impl WorkspaceId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for WorkspaceId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for WorkspaceId {
	fn from(id: &str) -> Self {
		Self(id.into())
	}
}

impl From<String> for WorkspaceId {
	fn from(id: String) -> Self {
		Self(id.into_boxed_str())
	}
}


// vim: ts=4
