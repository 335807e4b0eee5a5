//! Positional SQL over the exercise table.
//!
//! Rows have no stable key: an offset is the position in `rowid` order, and
//! every statement resolves it through `LIMIT 1 OFFSET ?`.

use crate::db::migrate::EXERCISE_TABLE;
use crate::models::exercise::Exercise;
use crate::models::field::Field;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Subquery selecting the rowid at offset `?` (bound by the caller).
fn rowid_at(param: usize) -> String {
    format!("(SELECT rowid FROM {EXERCISE_TABLE} ORDER BY rowid LIMIT 1 OFFSET ?{param})")
}

fn select_columns() -> String {
    Field::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Map a row selected with [`select_columns`] to an exercise.
/// NULL cells read as empty strings.
pub fn map_row(row: &Row) -> Result<Exercise> {
    let mut ex = Exercise::default();
    for field in Field::ALL {
        let value: Option<String> = row.get(field.index())?;
        ex.set(field, value.unwrap_or_default());
    }
    Ok(ex)
}

pub fn count_rows(conn: &Connection) -> Result<usize> {
    let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {EXERCISE_TABLE}"), [], |r| {
        r.get(0)
    })?;
    Ok(n as usize)
}

pub fn load_row(conn: &Connection, offset: usize) -> Result<Option<Exercise>> {
    let sql = format!(
        "SELECT {} FROM {EXERCISE_TABLE} ORDER BY rowid LIMIT 1 OFFSET ?1",
        select_columns()
    );
    conn.query_row(&sql, params![offset as i64], map_row)
        .optional()
}

pub fn load_all(conn: &Connection) -> Result<Vec<Exercise>> {
    let sql = format!(
        "SELECT {} FROM {EXERCISE_TABLE} ORDER BY rowid",
        select_columns()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_field(conn: &Connection, offset: usize, field: Field) -> Result<Option<String>> {
    let sql = format!(
        "SELECT {} FROM {EXERCISE_TABLE} ORDER BY rowid LIMIT 1 OFFSET ?1",
        field.name()
    );
    let value: Option<Option<String>> = conn
        .query_row(&sql, params![offset as i64], |r| r.get(0))
        .optional()?;
    Ok(value.map(Option::unwrap_or_default))
}

/// Returns the number of rows updated (0 when the offset is past the end).
pub fn update_field(conn: &Connection, offset: usize, field: Field, value: &str) -> Result<usize> {
    let sql = format!(
        "UPDATE {EXERCISE_TABLE} SET {} = ?1 WHERE rowid = {}",
        field.name(),
        rowid_at(2)
    );
    conn.execute(&sql, params![value, offset as i64])
}

pub fn insert_default(conn: &Connection) -> Result<usize> {
    conn.execute(&format!("INSERT INTO {EXERCISE_TABLE} DEFAULT VALUES"), [])
}

pub fn delete_at(conn: &Connection, offset: usize) -> Result<usize> {
    let sql = format!("DELETE FROM {EXERCISE_TABLE} WHERE rowid = {}", rowid_at(1));
    conn.execute(&sql, params![offset as i64])
}

/// Distinct non-empty values of one column, sorted ascending.
pub fn distinct_values(conn: &Connection, field: Field) -> Result<Vec<String>> {
    let col = field.name();
    let sql = format!(
        "SELECT DISTINCT {col} FROM {EXERCISE_TABLE}
         WHERE {col} IS NOT NULL AND {col} <> ''
         ORDER BY {col} ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
