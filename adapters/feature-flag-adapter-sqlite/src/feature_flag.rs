//! Feature flag row storage
//!
//! Reads are plain filtered selects. Writes go through a single
//! `INSERT ... ON CONFLICT DO UPDATE` statement so concurrent writers to the
//! same (workspace_id, key) pair are resolved by SQLite itself.

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use flagstore_types::feature_flag::{FeatureFlag, FeatureFlagKey};
use flagstore_types::feature_flag_adapter::{FeatureFlagFilter, UpsertOptions, UpsertResult};
use flagstore_types::prelude::*;

use crate::inspect;

fn push_filter(query: &mut QueryBuilder<'_, Sqlite>, filter: &FeatureFlagFilter) {
	let mut sep = " WHERE ";
	if let Some(workspace_id) = &filter.workspace_id {
		query.push(sep).push("workspace_id = ").push_bind(workspace_id.as_str().to_owned());
		sep = " AND ";
	}
	if let Some(key) = filter.key {
		query.push(sep).push("key = ").push_bind(key.as_str());
		sep = " AND ";
	}
	if let Some(value) = filter.value {
		query.push(sep).push("value = ").push_bind(value);
	}
}

fn map_row(row: &SqliteRow) -> ClResult<FeatureFlag> {
	let workspace_id: String =
		row.try_get("workspace_id").inspect_err(inspect).or(Err(Error::DbError))?;
	let key: String = row.try_get("key").inspect_err(inspect).or(Err(Error::DbError))?;
	let value: bool = row.try_get("value").inspect_err(inspect).or(Err(Error::DbError))?;

	let key = key.parse::<FeatureFlagKey>().map_err(|_| {
		warn!("DB: unknown feature flag key {:?} for workspace {}", key, workspace_id);
		Error::DbError
	})?;

	Ok(FeatureFlag { workspace_id: workspace_id.into(), key, value })
}

/// Read the first row matching the filter
pub(crate) async fn find_one(
	db: &SqlitePool,
	filter: &FeatureFlagFilter,
) -> ClResult<Option<FeatureFlag>> {
	let mut query = QueryBuilder::<Sqlite>::new("SELECT workspace_id, key, value FROM feature_flags");
	push_filter(&mut query, filter);
	query.push(" ORDER BY rowid LIMIT 1");

	let row = query
		.build()
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.as_ref().map(map_row).transpose()
}

/// List all rows matching the filter in insertion order
pub(crate) async fn list(db: &SqlitePool, filter: &FeatureFlagFilter) -> ClResult<Vec<FeatureFlag>> {
	let mut query = QueryBuilder::<Sqlite>::new("SELECT workspace_id, key, value FROM feature_flags");
	push_filter(&mut query, filter);
	query.push(" ORDER BY rowid");

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.iter().map(map_row).collect()
}

/// Insert or update all rows in one statement.
///
/// With `skip_update_if_no_values_changed` the conflict update carries a
/// `WHERE` clause, so an unchanged row is neither written nor returned.
pub(crate) async fn upsert(
	db: &SqlitePool,
	flags: &[FeatureFlag],
	opts: &UpsertOptions,
) -> ClResult<UpsertResult> {
	if flags.is_empty() {
		return Ok(UpsertResult::default());
	}

	let mut query = QueryBuilder::<Sqlite>::new("INSERT INTO feature_flags (workspace_id, key, value) ");
	query.push_values(flags, |mut row, flag| {
		row.push_bind(flag.workspace_id.as_str().to_owned())
			.push_bind(flag.key.as_str())
			.push_bind(flag.value);
	});

	if !opts.conflict_paths.is_empty() {
		query.push(" ON CONFLICT(");
		for (i, column) in opts.conflict_paths.iter().enumerate() {
			if i > 0 {
				query.push(", ");
			}
			query.push(column.column_name());
		}
		query.push(") DO UPDATE SET value = excluded.value, updated_at = unixepoch()");
		if opts.skip_update_if_no_values_changed {
			query.push(" WHERE feature_flags.value IS NOT excluded.value");
		}
	}
	query.push(" RETURNING workspace_id, key, value");

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let generated = rows.iter().map(map_row).collect::<ClResult<Vec<_>>>()?;
	debug!("Upserted {} feature flag row(s), {} written", flags.len(), generated.len());

	Ok(UpsertResult { generated })
}


// vim: ts=4
