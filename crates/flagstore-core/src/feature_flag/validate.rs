//! Flag key validation
//!
//! Validators are strategy objects so callers and tests can swap the policy
//! without touching the service.

use std::fmt::Debug;

use super::public_flags::is_public_feature_flag;
use crate::prelude::*;

pub trait FeatureFlagValidator: Debug + Send + Sync {
	/// Parse a raw candidate into a recognized key, failing closed on anything else
	fn assert_is_feature_flag_key(&self, candidate: &str) -> ClResult<FeatureFlagKey>;

	/// Fail unless the key is on the public allow-list
	fn assert_is_public_feature_flag(&self, key: FeatureFlagKey) -> ClResult<()>;
}

/// Validates against [`FeatureFlagKey`] and the public flag catalogue
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFeatureFlagValidator;

impl FeatureFlagValidator for DefaultFeatureFlagValidator {
	fn assert_is_feature_flag_key(&self, candidate: &str) -> ClResult<FeatureFlagKey> {
		candidate.parse::<FeatureFlagKey>().map_err(|err| {
			warn!("Rejected feature flag key: {:?}", candidate);
			Error::FeatureFlag(err)
		})
	}

	fn assert_is_public_feature_flag(&self, key: FeatureFlagKey) -> ClResult<()> {
		if is_public_feature_flag(key) {
			Ok(())
		} else {
			warn!("Feature flag {} is not public", key);
			Err(FeatureFlagError::not_public().into())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn feature_flag_error(res: ClResult<impl Debug>) -> Option<FeatureFlagError> {
		match res {
			Err(Error::FeatureFlag(err)) => Some(err),
			_ => None,
		}
	}

	#[test]
	fn test_accepts_known_keys() {
		let validator = DefaultFeatureFlagValidator;
		for key in FeatureFlagKey::ALL {
			assert_eq!(validator.assert_is_feature_flag_key(key.as_str()).ok(), Some(key));
		}
	}

	#[test]
	fn test_rejects_unknown_key() {
		let validator = DefaultFeatureFlagValidator;
		let err = feature_flag_error(validator.assert_is_feature_flag_key("INVALID_KEY"));
		assert_eq!(err, Some(FeatureFlagError::invalid_key()));
	}

	#[test]
	fn test_public_check() {
		let validator = DefaultFeatureFlagValidator;
		assert!(validator.assert_is_public_feature_flag(FeatureFlagKey::IsWorkflowEnabled).is_ok());

		let err = feature_flag_error(
			validator.assert_is_public_feature_flag(FeatureFlagKey::IsCopilotEnabled),
		);
		assert_eq!(err, Some(FeatureFlagError::not_public()));
	}
}

// vim: ts=4
