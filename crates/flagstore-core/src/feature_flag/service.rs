//! Feature flag service - typed, validated access to per-workspace flags

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use flagstore_types::feature_flag_adapter::{FeatureFlagAdapter, FeatureFlagFilter, UpsertOptions};

use super::public_flags::{PUBLIC_FEATURE_FLAGS, PublicFeatureFlag};
use super::types::UpsertFeatureFlag;
use super::validate::{DefaultFeatureFlagValidator, FeatureFlagValidator};
use crate::prelude::*;

/// Stateless between calls: every read goes to the adapter.
#[derive(Debug, Clone)]
pub struct FeatureFlagService {
	adapter: Arc<dyn FeatureFlagAdapter>,
	validator: Arc<dyn FeatureFlagValidator>,
}

impl FeatureFlagService {
	pub fn new(adapter: Arc<dyn FeatureFlagAdapter>) -> Self {
		Self::with_validator(adapter, Arc::new(DefaultFeatureFlagValidator))
	}

	pub fn with_validator(
		adapter: Arc<dyn FeatureFlagAdapter>,
		validator: Arc<dyn FeatureFlagValidator>,
	) -> Self {
		Self { adapter, validator }
	}

	/// True only if a row with value=true exists. A missing row and a row
	/// stored as false both yield false.
	pub async fn is_feature_enabled(
		&self,
		key: FeatureFlagKey,
		workspace_id: &WorkspaceId,
	) -> ClResult<bool> {
		let filter = FeatureFlagFilter::workspace(workspace_id).key(key).value(true);
		let flag = self.adapter.find_one(&filter).await?;
		debug!("Feature flag {} for workspace {}: {:?}", key, workspace_id, flag.is_some());

		Ok(flag.is_some_and(|flag| flag.value))
	}

	pub async fn get_workspace_feature_flags(
		&self,
		workspace_id: &WorkspaceId,
	) -> ClResult<Vec<FeatureFlag>> {
		self.adapter.list(&FeatureFlagFilter::workspace(workspace_id)).await
	}

	/// Flags reduced to key -> value. The last occurrence of a key wins.
	pub async fn get_workspace_feature_flags_map(
		&self,
		workspace_id: &WorkspaceId,
	) -> ClResult<HashMap<FeatureFlagKey, bool>> {
		let flags = self.get_workspace_feature_flags(workspace_id).await?;

		Ok(flags.into_iter().map(|flag| (flag.key, flag.value)).collect())
	}

	/// Enable every key in one batched upsert. Repeated keys are written once.
	pub async fn enable_feature_flags(
		&self,
		keys: &[FeatureFlagKey],
		workspace_id: &WorkspaceId,
	) -> ClResult<()> {
		if keys.is_empty() {
			return Ok(());
		}

		let mut seen = HashSet::new();
		let flags: Vec<FeatureFlag> = keys
			.iter()
			.filter(|&&key| seen.insert(key))
			.map(|&key| FeatureFlag::new(workspace_id.clone(), key, true))
			.collect();
		self.adapter.upsert(&flags, &UpsertOptions::workspace_key()).await?;

		info!("Enabled {} feature flag(s) for workspace {}", flags.len(), workspace_id);
		Ok(())
	}

	/// Validate and upsert a single flag.
	///
	/// Validation runs before the write: an unknown key, or a non-public key
	/// when `should_be_public` is set, fails without touching the adapter.
	/// Returns the row the adapter reports as written, or the requested row
	/// when the write was skipped because the value was unchanged.
	pub async fn upsert_workspace_feature_flag(
		&self,
		input: UpsertFeatureFlag,
	) -> ClResult<FeatureFlag> {
		let key = self.validator.assert_is_feature_flag_key(&input.feature_flag)?;

		if input.should_be_public {
			self.validator.assert_is_public_feature_flag(key)?;
		}

		let flag = FeatureFlag::new(input.workspace_id, key, input.value);
		let res = self
			.adapter
			.upsert(std::slice::from_ref(&flag), &UpsertOptions::workspace_key())
			.await?;

		info!("Feature flag {}={} upserted for workspace {}", key, flag.value, flag.workspace_id);

		Ok(res
			.generated
			.into_iter()
			.find(|row| row.key == flag.key && row.workspace_id == flag.workspace_id)
			.unwrap_or(flag))
	}

	/// Flags that may be toggled through public call paths
	pub fn list_public_feature_flags(&self) -> &'static [PublicFeatureFlag] {
		PUBLIC_FEATURE_FLAGS
	}
}

// vim: ts=4
