use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_preferences_table(conn)?;
    Ok(())
}

fn create_preferences_table(conn: &Connection) -> Result<()> {
    // One row per preference key; values are opaque text blobs
    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create preferences table")?;

    Ok(())
}
