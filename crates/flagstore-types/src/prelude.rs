pub use crate::error::{ClResult, Error, FeatureFlagError};
pub use crate::types::WorkspaceId;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
