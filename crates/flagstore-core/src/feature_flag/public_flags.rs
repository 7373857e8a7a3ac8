//! Catalogue of flags exposed through public (non-internal) call paths
//!
//! Only the keys listed here may be toggled from the workspace "lab" screen.

use serde::Serialize;

use crate::prelude::*;

/// Display metadata for a public flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagMetadata {
	pub label: &'static str,
	pub description: &'static str,
	pub image_path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublicFeatureFlag {
	pub key: FeatureFlagKey,
	pub metadata: FeatureFlagMetadata,
}

pub static PUBLIC_FEATURE_FLAGS: &[PublicFeatureFlag] = &[
	PublicFeatureFlag {
		key: FeatureFlagKey::IsWorkflowEnabled,
		metadata: FeatureFlagMetadata {
			label: "Workflows",
			description: "Create custom workflows to automate your work.",
			image_path: "/images/lab/is-workflow-enabled.png",
		},
	},
	PublicFeatureFlag {
		key: FeatureFlagKey::IsCustomDomainEnabled,
		metadata: FeatureFlagMetadata {
			label: "Custom Domain",
			description: "Serve the workspace from your own domain.",
			image_path: "/images/lab/is-custom-domain-enabled.png",
		},
	},
];

/// Look up a key in the public catalogue
pub fn find_public_feature_flag(key: FeatureFlagKey) -> Option<&'static PublicFeatureFlag> {
	PUBLIC_FEATURE_FLAGS.iter().find(|flag| flag.key == key)
}

pub fn is_public_feature_flag(key: FeatureFlagKey) -> bool {
	find_public_feature_flag(key).is_some()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_public_catalogue() {
		assert!(is_public_feature_flag(FeatureFlagKey::IsWorkflowEnabled));
		assert!(is_public_feature_flag(FeatureFlagKey::IsCustomDomainEnabled));
		assert!(!is_public_feature_flag(FeatureFlagKey::IsCopilotEnabled));
		assert!(!is_public_feature_flag(FeatureFlagKey::IsBillingPlansEnabled));
	}

	#[test]
	fn test_public_catalogue_has_no_duplicates() {
		for (i, flag) in PUBLIC_FEATURE_FLAGS.iter().enumerate() {
			assert!(
				PUBLIC_FEATURE_FLAGS[i + 1..].iter().all(|other| other.key != flag.key),
				"{} listed twice",
				flag.key
			);
		}
	}

	#[test]
	fn test_find_public_feature_flag_metadata() {
		let flag = find_public_feature_flag(FeatureFlagKey::IsWorkflowEnabled);
		assert_eq!(flag.map(|f| f.metadata.label), Some("Workflows"));
	}
}

// vim: ts=4
