//! Feature flag keys and the persisted flag row.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FeatureFlagError;
use crate::types::WorkspaceId;

/// Closed enumeration of recognized flag names.
///
/// Keys are stored and serialized by their SCREAMING_SNAKE_CASE name, e.g.
/// `IS_WORKFLOW_ENABLED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureFlagKey {
	#[serde(rename = "IS_AIRTABLE_INTEGRATION_ENABLED")]
	IsAirtableIntegrationEnabled,
	#[serde(rename = "IS_POSTGRESQL_INTEGRATION_ENABLED")]
	IsPostgreSqlIntegrationEnabled,
	#[serde(rename = "IS_STRIPE_INTEGRATION_ENABLED")]
	IsStripeIntegrationEnabled,
	#[serde(rename = "IS_COPILOT_ENABLED")]
	IsCopilotEnabled,
	#[serde(rename = "IS_WORKFLOW_ENABLED")]
	IsWorkflowEnabled,
	#[serde(rename = "IS_EVENT_OBJECT_ENABLED")]
	IsEventObjectEnabled,
	#[serde(rename = "IS_ANALYTICS_V2_ENABLED")]
	IsAnalyticsV2Enabled,
	#[serde(rename = "IS_UNIQUE_INDEXES_ENABLED")]
	IsUniqueIndexesEnabled,
	#[serde(rename = "IS_JSON_FILTER_ENABLED")]
	IsJsonFilterEnabled,
	#[serde(rename = "IS_CUSTOM_DOMAIN_ENABLED")]
	IsCustomDomainEnabled,
	#[serde(rename = "IS_APPROVED_ACCESS_DOMAINS_ENABLED")]
	IsApprovedAccessDomainsEnabled,
	#[serde(rename = "IS_BILLING_PLANS_ENABLED")]
	IsBillingPlansEnabled,
	#[serde(rename = "IS_PERMISSIONS_ENABLED")]
	IsPermissionsEnabled,
}

impl FeatureFlagKey {
	pub const ALL: [FeatureFlagKey; 13] = [
		FeatureFlagKey::IsAirtableIntegrationEnabled,
		FeatureFlagKey::IsPostgreSqlIntegrationEnabled,
		FeatureFlagKey::IsStripeIntegrationEnabled,
		FeatureFlagKey::IsCopilotEnabled,
		FeatureFlagKey::IsWorkflowEnabled,
		FeatureFlagKey::IsEventObjectEnabled,
		FeatureFlagKey::IsAnalyticsV2Enabled,
		FeatureFlagKey::IsUniqueIndexesEnabled,
		FeatureFlagKey::IsJsonFilterEnabled,
		FeatureFlagKey::IsCustomDomainEnabled,
		FeatureFlagKey::IsApprovedAccessDomainsEnabled,
		FeatureFlagKey::IsBillingPlansEnabled,
		FeatureFlagKey::IsPermissionsEnabled,
	];

	/// Stored name of the key. Must agree with the serde renames above.
	pub fn as_str(&self) -> &'static str {
		match self {
			FeatureFlagKey::IsAirtableIntegrationEnabled => "IS_AIRTABLE_INTEGRATION_ENABLED",
			FeatureFlagKey::IsPostgreSqlIntegrationEnabled => "IS_POSTGRESQL_INTEGRATION_ENABLED",
			FeatureFlagKey::IsStripeIntegrationEnabled => "IS_STRIPE_INTEGRATION_ENABLED",
			FeatureFlagKey::IsCopilotEnabled => "IS_COPILOT_ENABLED",
			FeatureFlagKey::IsWorkflowEnabled => "IS_WORKFLOW_ENABLED",
			FeatureFlagKey::IsEventObjectEnabled => "IS_EVENT_OBJECT_ENABLED",
			FeatureFlagKey::IsAnalyticsV2Enabled => "IS_ANALYTICS_V2_ENABLED",
			FeatureFlagKey::IsUniqueIndexesEnabled => "IS_UNIQUE_INDEXES_ENABLED",
			FeatureFlagKey::IsJsonFilterEnabled => "IS_JSON_FILTER_ENABLED",
			FeatureFlagKey::IsCustomDomainEnabled => "IS_CUSTOM_DOMAIN_ENABLED",
			FeatureFlagKey::IsApprovedAccessDomainsEnabled => "IS_APPROVED_ACCESS_DOMAINS_ENABLED",
			FeatureFlagKey::IsBillingPlansEnabled => "IS_BILLING_PLANS_ENABLED",
			FeatureFlagKey::IsPermissionsEnabled => "IS_PERMISSIONS_ENABLED",
		}
	}
}

impl std::fmt::Display for FeatureFlagKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FeatureFlagKey {
	type Err = FeatureFlagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		FeatureFlagKey::ALL
			.iter()
			.find(|key| key.as_str() == s)
			.copied()
			.ok_or_else(FeatureFlagError::invalid_key)
	}
}

/// A persisted flag row. At most one exists per (workspace_id, key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
	pub workspace_id: WorkspaceId,
	pub key: FeatureFlagKey,
	pub value: bool,
}

impl FeatureFlag {
	pub fn new(workspace_id: WorkspaceId, key: FeatureFlagKey, value: bool) -> Self {
		Self { workspace_id, key, value }
	}
}


// vim: ts=4
