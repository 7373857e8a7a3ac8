//! Input types for the feature flag service

use crate::prelude::*;

/// Request to set a single flag.
///
/// `feature_flag` is the raw key as received from the caller; it is validated
/// against [`FeatureFlagKey`] before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertFeatureFlag {
	pub workspace_id: WorkspaceId,
	pub feature_flag: Box<str>,
	pub value: bool,
	/// Require the key to be on the public allow-list
	pub should_be_public: bool,
}

impl UpsertFeatureFlag {
	pub fn new(workspace_id: WorkspaceId, feature_flag: impl Into<Box<str>>, value: bool) -> Self {
		Self { workspace_id, feature_flag: feature_flag.into(), value, should_be_public: false }
	}

	pub fn public(mut self, should_be_public: bool) -> Self {
		self.should_be_public = should_be_public;
		self
	}
}

// vim: ts=4
