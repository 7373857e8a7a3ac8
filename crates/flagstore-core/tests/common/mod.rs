//! Test adapter and validator doubles
//!
//! `RecordingAdapter` keeps rows in memory and records every call so tests
//! can assert on exactly what the service asked the persistence layer to do.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;

use flagstore_core::FeatureFlagValidator;
use flagstore_types::error::{ClResult, Error, FeatureFlagError};
use flagstore_types::feature_flag::{FeatureFlag, FeatureFlagKey};
use flagstore_types::feature_flag_adapter::{
	FeatureFlagAdapter, FeatureFlagFilter, UpsertOptions, UpsertResult,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
	FindOne(FeatureFlagFilter),
	List(FeatureFlagFilter),
	Upsert(Vec<FeatureFlag>, UpsertOptions),
}

#[derive(Debug, Default)]
pub struct RecordingAdapter {
	rows: Mutex<Vec<FeatureFlag>>,
	calls: Mutex<Vec<Call>>,
	fail_writes: bool,
}

impl RecordingAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_rows(rows: Vec<FeatureFlag>) -> Self {
		Self { rows: Mutex::new(rows), ..Default::default() }
	}

	/// Every upsert fails with a database error
	pub fn failing_writes() -> Self {
		Self { fail_writes: true, ..Default::default() }
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().clone()
	}

	pub fn upserts(&self) -> Vec<(Vec<FeatureFlag>, UpsertOptions)> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				Call::Upsert(flags, opts) => Some((flags, opts)),
				_ => None,
			})
			.collect()
	}

	pub fn rows(&self) -> Vec<FeatureFlag> {
		self.rows.lock().clone()
	}
}

#[async_trait]
impl FeatureFlagAdapter for RecordingAdapter {
	async fn find_one(&self, filter: &FeatureFlagFilter) -> ClResult<Option<FeatureFlag>> {
		self.calls.lock().push(Call::FindOne(filter.clone()));
		Ok(self.rows.lock().iter().find(|row| filter.matches(row)).cloned())
	}

	async fn list(&self, filter: &FeatureFlagFilter) -> ClResult<Vec<FeatureFlag>> {
		self.calls.lock().push(Call::List(filter.clone()));
		Ok(self.rows.lock().iter().filter(|row| filter.matches(row)).cloned().collect())
	}

	async fn upsert(
		&self,
		flags: &[FeatureFlag],
		opts: &UpsertOptions,
	) -> ClResult<UpsertResult> {
		self.calls.lock().push(Call::Upsert(flags.to_vec(), opts.clone()));
		if self.fail_writes {
			return Err(Error::DbError);
		}

		let mut rows = self.rows.lock();
		let mut generated = Vec::new();
		for flag in flags {
			match rows
				.iter_mut()
				.find(|row| row.workspace_id == flag.workspace_id && row.key == flag.key)
			{
				Some(row) if opts.skip_update_if_no_values_changed && row.value == flag.value => {}
				Some(row) => {
					row.value = flag.value;
					generated.push(row.clone());
				}
				None => {
					rows.push(flag.clone());
					generated.push(flag.clone());
				}
			}
		}

		Ok(UpsertResult { generated })
	}
}

/// Validator that accepts every known key and rejects every public check
#[derive(Debug, Default)]
pub struct NothingPublicValidator;

impl FeatureFlagValidator for NothingPublicValidator {
	fn assert_is_feature_flag_key(&self, candidate: &str) -> ClResult<FeatureFlagKey> {
		candidate.parse::<FeatureFlagKey>().map_err(Error::FeatureFlag)
	}

	fn assert_is_public_feature_flag(&self, _key: FeatureFlagKey) -> ClResult<()> {
		Err(FeatureFlagError::not_public().into())
	}
}

/// Validator that rejects every key
#[derive(Debug, Default)]
pub struct RejectAllValidator;

impl FeatureFlagValidator for RejectAllValidator {
	fn assert_is_feature_flag_key(&self, _candidate: &str) -> ClResult<FeatureFlagKey> {
		Err(FeatureFlagError::invalid_key().into())
	}

	fn assert_is_public_feature_flag(&self, _key: FeatureFlagKey) -> ClResult<()> {
		Err(FeatureFlagError::not_public().into())
	}
}

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// vim: ts=4
