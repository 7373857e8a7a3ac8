//! Feature flag subsystem
//!
//! - **Public flags** (`public_flags.rs`): keys allowed through public call paths
//! - **Validation** (`validate.rs`): key membership and public visibility checks
//! - **Service** (`service.rs`): FeatureFlagService, the store operations
//! - **Types** (`types.rs`): service inputs

pub mod public_flags;
pub mod service;
pub mod types;
pub mod validate;

pub use public_flags::{FeatureFlagMetadata, PUBLIC_FEATURE_FLAGS, PublicFeatureFlag};
pub use service::FeatureFlagService;
pub use types::UpsertFeatureFlag;
pub use validate::{DefaultFeatureFlagValidator, FeatureFlagValidator};

// vim: ts=4
