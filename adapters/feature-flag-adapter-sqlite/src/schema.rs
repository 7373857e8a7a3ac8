//! Database schema initialization
//!
//! Creates the feature flag table if it does not exist yet.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Feature flags
	//***************
	// One row per (workspace_id, key). updated_at only moves when an upsert
	// actually changes the value.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS feature_flags (
		workspace_id text NOT NULL,
		key text NOT NULL,
		value boolean NOT NULL DEFAULT 0,
		created_at datetime DEFAULT (unixepoch()),
		updated_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(workspace_id, key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
