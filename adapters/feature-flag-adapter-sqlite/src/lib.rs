//! SQLite feature flag adapter
//!
//! Stores one row per (workspace_id, key) and resolves upsert conflicts with
//! SQLite's native `ON CONFLICT` clause.

use async_trait::async_trait;
use std::{path::Path, time::Duration};

use sqlx::sqlite::{self, SqlitePool};

use flagstore_types::feature_flag::FeatureFlag;
use flagstore_types::feature_flag_adapter::{
	FeatureFlagAdapter, FeatureFlagFilter, UpsertOptions, UpsertResult,
};
use flagstore_types::prelude::*;

mod feature_flag;
mod schema;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Connection pool settings
#[derive(Debug, Clone)]
pub struct AdapterConfig {
	pub max_connections: u32,
	/// How long a connection waits on a locked database before failing
	pub busy_timeout_secs: u64,
}

impl Default for AdapterConfig {
	fn default() -> Self {
		Self { max_connections: 5, busy_timeout_secs: 5 }
	}
}

#[derive(Debug)]
pub struct FeatureFlagAdapterSqlite {
	db: SqlitePool,
}

impl FeatureFlagAdapterSqlite {
	/// Open (creating if missing) the database file at `path`
	pub async fn new(path: impl AsRef<Path>, config: AdapterConfig) -> ClResult<Self> {
		let path = path.as_ref();
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(parent).await?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal)
			.busy_timeout(Duration::from_secs(config.busy_timeout_secs));
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(config.max_connections)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		schema::init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;
		info!("Feature flag database opened at {}", path.display());

		Ok(Self { db })
	}
}

#[async_trait]
impl FeatureFlagAdapter for FeatureFlagAdapterSqlite {
	async fn find_one(&self, filter: &FeatureFlagFilter) -> ClResult<Option<FeatureFlag>> {
		feature_flag::find_one(&self.db, filter).await
	}

	async fn list(&self, filter: &FeatureFlagFilter) -> ClResult<Vec<FeatureFlag>> {
		feature_flag::list(&self.db, filter).await
	}

	async fn upsert(
		&self,
		flags: &[FeatureFlag],
		opts: &UpsertOptions,
	) -> ClResult<UpsertResult> {
		feature_flag::upsert(&self.db, flags, opts).await
	}
}

// vim: ts=4
