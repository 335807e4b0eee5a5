use crate::cli::commands::{load_controller, open_store, parse_field};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workflow::EditOutcome;
use crate::db::log::fdlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{self, Read};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { field, value, file } = cmd {
        let field = parse_field(field)?;

        let value = match (value, file) {
            (Some(v), _) => v.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut store = open_store(cfg)?;
        let mut ctrl = load_controller(&store)?;

        match ctrl.edit(&mut store, field, &value)? {
            EditOutcome::Written => {
                let row = ctrl.selected().map(|o| o + 1).unwrap_or_default();
                fdlog_quiet(
                    store.conn(),
                    "edit",
                    &format!("#{} {}", row, field),
                    &format!("{} characters", value.chars().count()),
                );
                success(format!("{} of exercise #{} saved.", field, row));
            }
            EditOutcome::Unchanged => info(format!("{} unchanged.", field)),
            EditOutcome::NotEditable => warning(format!(
                "{} is not editable in step {}. Editable here: {}.",
                field,
                ctrl.step(),
                editable_list(&ctrl)
            )),
            EditOutcome::NoSelection => return Err(AppError::NoSelection),
        }
    }

    Ok(())
}

fn editable_list(ctrl: &crate::core::workflow::WorkflowController) -> String {
    let names: Vec<&str> = ctrl
        .step()
        .panels()
        .iter()
        .filter(|p| p.editable)
        .map(|p| p.field.name())
        .collect();
    if names.is_empty() {
        "nothing".to_string()
    } else {
        names.join(", ")
    }
}
