use crate::cli::commands::{load_controller, open_store, save_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::fdlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::ui::view::render_step;

/// Append an empty exercise and select it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::New) {
        let mut store = open_store(cfg)?;
        let mut ctrl = load_controller(&store)?;

        let offset = store.row_count()?;
        if !store.insert_row(offset)? {
            return Err(AppError::Other(format!(
                "could not append exercise at row {}",
                offset + 1
            )));
        }

        ctrl.select(&store, offset)?;
        save_controller(&store, &ctrl)?;

        fdlog_quiet(
            store.conn(),
            "new",
            &format!("#{}", offset + 1),
            "Exercise created",
        );

        success(format!("Exercise #{} created and selected.", offset + 1));
        print!("{}", render_step(&ctrl.view()));
    }

    Ok(())
}
