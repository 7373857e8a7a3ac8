pub use flagstore_types::error::{ClResult, Error, FeatureFlagError};
pub use flagstore_types::feature_flag::{FeatureFlag, FeatureFlagKey};
pub use flagstore_types::types::WorkspaceId;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
