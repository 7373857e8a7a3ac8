//! Error types shared by the store, its validators and the adapters.

pub type ClResult<T> = std::result::Result<T, Error>;

/// Machine-checkable code carried by every feature flag error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureFlagErrorCode {
	InvalidFeatureFlagKey,
}

impl FeatureFlagErrorCode {
	pub fn as_str(&self) -> &'static str {
		match self {
			FeatureFlagErrorCode::InvalidFeatureFlagKey => "INVALID_FEATURE_FLAG_KEY",
		}
	}
}

/// Validation failure raised before any write is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlagError {
	pub code: FeatureFlagErrorCode,
	pub message: String,
}

impl FeatureFlagError {
	pub fn new(code: FeatureFlagErrorCode, message: impl Into<String>) -> Self {
		Self { code, message: message.into() }
	}

	/// The candidate is not a member of the key enumeration
	pub fn invalid_key() -> Self {
		Self::new(FeatureFlagErrorCode::InvalidFeatureFlagKey, "Invalid feature flag key")
	}

	/// The key is valid but may not be used through public call paths
	pub fn not_public() -> Self {
		Self::new(
			FeatureFlagErrorCode::InvalidFeatureFlagKey,
			"Invalid feature flag key, flag is not public",
		)
	}
}

impl std::fmt::Display for FeatureFlagError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({})", self.message, self.code.as_str())
	}
}

impl std::error::Error for FeatureFlagError {}

#[derive(Debug)]
pub enum Error {
	FeatureFlag(FeatureFlagError),
	DbError,
	ConfigError(String),
	Serialization(String),

	// externals
	Io(std::io::Error),
}

impl From<FeatureFlagError> for Error {
	fn from(err: FeatureFlagError) -> Self {
		Self::FeatureFlag(err)
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::FeatureFlag(err) => write!(f, "{}", err),
			Error::DbError => write!(f, "database error"),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Serialization(msg) => write!(f, "serialization error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_feature_flag_error_messages() {
		let err = FeatureFlagError::invalid_key();
		assert_eq!(err.code, FeatureFlagErrorCode::InvalidFeatureFlagKey);
		assert_eq!(err.message, "Invalid feature flag key");

		let err = FeatureFlagError::not_public();
		assert_eq!(err.code, FeatureFlagErrorCode::InvalidFeatureFlagKey);
		assert_eq!(err.message, "Invalid feature flag key, flag is not public");
	}

	#[test]
	fn test_error_display() {
		let err: Error = FeatureFlagError::invalid_key().into();
		assert_eq!(err.to_string(), "Invalid feature flag key (INVALID_FEATURE_FLAG_KEY)");
		assert_eq!(Error::DbError.to_string(), "database error");
		assert_eq!(
			Error::ConfigError("missing workspace".into()).to_string(),
			"configuration error: missing workspace"
		);
		assert_eq!(
			Error::Serialization("key must be a string".into()).to_string(),
			"serialization error: key must be a string"
		);
	}
}

// vim: ts=4
