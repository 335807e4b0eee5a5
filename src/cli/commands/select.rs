use crate::cli::commands::{load_controller, open_store, row_to_offset, save_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::view::render_step;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select { row } = cmd {
        let offset = row_to_offset(*row)?;
        let store = open_store(cfg)?;
        let mut ctrl = load_controller(&store)?;

        let found = ctrl.select(&store, offset)?;
        save_controller(&store, &ctrl)?;

        if !found {
            return Err(AppError::InvalidRow(*row));
        }

        print!("{}", render_step(&ctrl.view()));
    }

    Ok(())
}
