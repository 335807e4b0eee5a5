//! Export every exercise to JSON or CSV.

use crate::core::store::ExerciseStore;
use crate::errors::{AppError, AppResult};
use crate::models::exercise::Exercise;
use crate::models::field::Field;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// One exported row: the 1-based row number plus the eight fields.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    row: usize,
    #[serde(flatten)]
    exercise: &'a Exercise,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write all rows of `store` to `path`. Returns the number of rows written.
    /// An existing file is only replaced when `force` is set.
    pub fn export(
        store: &ExerciseStore,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let rows = store.rows()?;
        match format {
            ExportFormat::Json => write_json(&rows, path)?,
            ExportFormat::Csv => write_csv(&rows, path)?,
        }
        Ok(rows.len())
    }
}

fn write_json(rows: &[Exercise], path: &Path) -> AppResult<()> {
    let out: Vec<ExportRow> = rows
        .iter()
        .enumerate()
        .map(|(i, exercise)| ExportRow {
            row: i + 1,
            exercise,
        })
        .collect();

    let json = serde_json::to_string_pretty(&out).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

fn write_csv(rows: &[Exercise], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    let mut header = vec!["Row"];
    header.extend(Field::ALL.iter().map(|f| f.name()));
    wtr.write_record(&header)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for (i, ex) in rows.iter().enumerate() {
        let number = (i + 1).to_string();
        let mut record = vec![number.as_str()];
        record.extend(ex.values());
        wtr.write_record(&record)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
