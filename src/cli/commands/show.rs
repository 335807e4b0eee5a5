use crate::cli::commands::{load_controller, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::view::render_step;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Show) {
        let store = open_store(cfg)?;
        let ctrl = load_controller(&store)?;
        print!("{}", render_step(&ctrl.view()));
    }

    Ok(())
}
