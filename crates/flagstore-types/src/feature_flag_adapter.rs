//! Adapter that persists per-workspace feature flag rows.
//!
//! The store never caches rows; every call goes to the adapter. Conflict
//! handling on upsert is delegated to the backend's native insert-or-update
//! so that concurrent writers to the same (workspace, key) pair are resolved
//! by the database.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::feature_flag::{FeatureFlag, FeatureFlagKey};
use crate::prelude::*;

/// Equality predicate over flag rows. `None` fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlagFilter {
	pub workspace_id: Option<WorkspaceId>,
	pub key: Option<FeatureFlagKey>,
	pub value: Option<bool>,
}

impl FeatureFlagFilter {
	pub fn workspace(workspace_id: &WorkspaceId) -> Self {
		Self { workspace_id: Some(workspace_id.clone()), ..Default::default() }
	}

	pub fn key(mut self, key: FeatureFlagKey) -> Self {
		self.key = Some(key);
		self
	}

	pub fn value(mut self, value: bool) -> Self {
		self.value = Some(value);
		self
	}

	/// Check a row against the predicate
	pub fn matches(&self, flag: &FeatureFlag) -> bool {
		self.workspace_id.as_ref().is_none_or(|id| *id == flag.workspace_id)
			&& self.key.is_none_or(|key| key == flag.key)
			&& self.value.is_none_or(|value| value == flag.value)
	}
}

/// Columns that can take part in an upsert conflict target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureFlagColumn {
	WorkspaceId,
	Key,
}

impl FeatureFlagColumn {
	pub fn column_name(&self) -> &'static str {
		match self {
			FeatureFlagColumn::WorkspaceId => "workspace_id",
			FeatureFlagColumn::Key => "key",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOptions {
	/// Conflict target. Empty means a plain insert.
	pub conflict_paths: Vec<FeatureFlagColumn>,
	/// Leave the stored row untouched when the incoming value equals it
	pub skip_update_if_no_values_changed: bool,
}

impl UpsertOptions {
	/// Conflict on (workspace_id, key), skipping unchanged rows
	pub fn workspace_key() -> Self {
		Self {
			conflict_paths: vec![FeatureFlagColumn::WorkspaceId, FeatureFlagColumn::Key],
			skip_update_if_no_values_changed: true,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertResult {
	/// Rows actually inserted or updated, as reported by the backend
	pub generated: Vec<FeatureFlag>,
}

#[async_trait]
pub trait FeatureFlagAdapter: Debug + Send + Sync {
	/// Reads the first row matching the filter
	async fn find_one(&self, filter: &FeatureFlagFilter) -> ClResult<Option<FeatureFlag>>;

	/// Lists every row matching the filter in storage order
	async fn list(&self, filter: &FeatureFlagFilter) -> ClResult<Vec<FeatureFlag>>;

	/// Inserts or updates all rows in a single write
	async fn upsert(&self, flags: &[FeatureFlag], opts: &UpsertOptions)
		-> ClResult<UpsertResult>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_filter_matches() {
		let ws = WorkspaceId::from("workspace-id");
		let flag = FeatureFlag::new(ws.clone(), FeatureFlagKey::IsWorkflowEnabled, true);

		assert!(FeatureFlagFilter::default().matches(&flag));
		assert!(FeatureFlagFilter::workspace(&ws).matches(&flag));
		assert!(
			FeatureFlagFilter::workspace(&ws)
				.key(FeatureFlagKey::IsWorkflowEnabled)
				.value(true)
				.matches(&flag)
		);
		assert!(!FeatureFlagFilter::workspace(&ws).value(false).matches(&flag));
		assert!(!FeatureFlagFilter::workspace(&ws).key(FeatureFlagKey::IsCopilotEnabled).matches(&flag));
		assert!(!FeatureFlagFilter::workspace(&"other".into()).matches(&flag));
	}

	#[test]
	fn test_workspace_key_options() {
		let opts = UpsertOptions::workspace_key();
		assert_eq!(opts.conflict_paths, vec![FeatureFlagColumn::WorkspaceId, FeatureFlagColumn::Key]);
		assert!(opts.skip_update_if_no_values_changed);
	}
}

// vim: ts=4
