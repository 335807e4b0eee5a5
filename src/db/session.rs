//! Persisted workflow state: which row is selected and which step is open.
//! A GUI keeps this in its widgets; the CLI keeps it here between runs.

use crate::models::step::Step;
use rusqlite::{Connection, OptionalExtension, Result, params};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub row: Option<usize>,
    pub step: Step,
}

pub fn load_session(conn: &Connection) -> Result<SessionState> {
    let found: Option<(Option<i64>, i64)> = conn
        .query_row("SELECT row, step FROM session WHERE id = 1", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .optional()?;

    Ok(match found {
        Some((row, step)) => SessionState {
            row: row.and_then(|r| usize::try_from(r).ok()),
            step: u8::try_from(step)
                .ok()
                .and_then(Step::from_number)
                .unwrap_or(Step::TakeNotes),
        },
        None => SessionState::default(),
    })
}

pub fn save_session(conn: &Connection, state: &SessionState) -> Result<()> {
    conn.execute(
        "INSERT INTO session (id, row, step) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET row = excluded.row, step = excluded.step",
        params![state.row.map(|r| r as i64), state.step.number()],
    )?;
    Ok(())
}
