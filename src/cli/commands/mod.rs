//! One handler per subcommand, plus the plumbing they share: opening the
//! store and carrying the workflow controller across invocations.

pub mod backup;
pub mod complete;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod jumble;
pub mod list;
pub mod log;
pub mod new;
pub mod remove;
pub mod select;
pub mod set;
pub mod show;
pub mod step;

use crate::config::Config;
use crate::core::store::ExerciseStore;
use crate::core::workflow::WorkflowController;
use crate::db::session::{load_session, save_session};
use crate::errors::{AppError, AppResult};
use crate::models::field::Field;
use std::fs;
use std::path::Path;

/// Open the configured database, creating its directory and schema.
pub fn open_store(cfg: &Config) -> AppResult<ExerciseStore> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    ExerciseStore::open_path(&cfg.database)
}

/// Controller restored from the persisted session.
pub fn load_controller(store: &ExerciseStore) -> AppResult<WorkflowController> {
    let mut ctrl = WorkflowController::new();
    ctrl.restore(store, load_session(store.conn())?)?;
    Ok(ctrl)
}

pub fn save_controller(store: &ExerciseStore, ctrl: &WorkflowController) -> AppResult<()> {
    save_session(store.conn(), &ctrl.session_state())?;
    Ok(())
}

/// 1-based row number → offset. Row 0 does not exist.
pub fn row_to_offset(row: usize) -> AppResult<usize> {
    row.checked_sub(1).ok_or(AppError::InvalidRow(row))
}

pub fn parse_field(name: &str) -> AppResult<Field> {
    Field::from_name(name).ok_or_else(|| AppError::InvalidField(name.to_string()))
}
