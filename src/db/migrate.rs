//! Schema management.
//!
//! The exercise table keeps the exact layout used by earlier releases
//! (`FranklinExercise`, eight `TEXT DEFAULT ''` columns, rowid ordering), so
//! existing `exercises.db` files open unchanged. The `log` and `session`
//! tables are added on top when missing.

use crate::models::field::Field;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

pub const EXERCISE_TABLE: &str = "FranklinExercise";

/// Check if a table with the given name exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the exercise table (one TEXT column per field, in column order).
fn ensure_exercise_table(conn: &Connection) -> Result<()> {
    let columns = Field::ALL
        .iter()
        .map(|f| format!("{} TEXT DEFAULT ''", f.name()))
        .collect::<Vec<_>>()
        .join(",");

    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {EXERCISE_TABLE} ({columns});"
    ))
}

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Ensure that the single-row `session` table exists and holds its row.
fn ensure_session_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session (
            id    INTEGER PRIMARY KEY CHECK (id = 1),
            row   INTEGER,
            step  INTEGER NOT NULL DEFAULT 1 CHECK (step BETWEEN 1 AND 6)
        );

        INSERT OR IGNORE INTO session (id, row, step) VALUES (1, NULL, 1);
        "#,
    )
}

/// Create every missing table. Safe to call on each start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let fresh = !table_exists(conn, EXERCISE_TABLE)?;

    ensure_exercise_table(conn)?;
    ensure_log_table(conn)?;
    ensure_session_table(conn)?;

    if fresh {
        conn.execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, 'migration_applied', ?2, ?3)",
            [
                chrono::Local::now().to_rfc3339(),
                EXERCISE_TABLE.to_string(),
                "Exercise table created".to_string(),
            ],
        )?;
    }

    Ok(())
}

/// Tables the `db --migrate` command reports on.
pub fn report_schema(conn: &Connection) -> Result<()> {
    for name in [EXERCISE_TABLE, "log", "session"] {
        if table_exists(conn, name)? {
            success(format!("Table '{}' present.", name));
        }
    }
    Ok(())
}
