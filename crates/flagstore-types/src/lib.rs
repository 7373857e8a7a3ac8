//! Shared types, adapter traits, and error types for the feature flag store.
//!
//! Adapter crates depend only on this crate, so storage backends compile
//! independently from the service layer.

pub mod error;
pub mod feature_flag;
pub mod feature_flag_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
