//! Per-workspace feature flag store.
//!
//! The service validates flag keys and public visibility before writing and
//! delegates persistence to a [`FeatureFlagAdapter`](flagstore_types::feature_flag_adapter::FeatureFlagAdapter).

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod feature_flag;
pub mod prelude;

pub use feature_flag::{
	DefaultFeatureFlagValidator, FeatureFlagService, FeatureFlagValidator, UpsertFeatureFlag,
};

// vim: ts=4
