use crate::cli::commands::{load_controller, open_store, save_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workflow::OverwritePrompt;
use crate::errors::{AppError, AppResult};
use crate::models::step::Step;
use crate::ui::messages::{ask_confirmation, warning};
use crate::ui::view::render_step;

/// Asks on the terminal unless `--overwrite` was given.
struct TerminalPrompt {
    assume_yes: bool,
}

impl OverwritePrompt for TerminalPrompt {
    fn confirm_overwrite(&mut self) -> bool {
        self.assume_yes
            || ask_confirmation(
                "There are contents in the corrections. Overwrite them with the rewrite from step 2?",
            )
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Step { number, overwrite } = cmd {
        let step = Step::from_number(*number).ok_or(AppError::InvalidStep(*number))?;

        let mut store = open_store(cfg)?;
        let mut ctrl = load_controller(&store)?;

        if ctrl.selected().is_none() {
            warning("No exercise selected: only the step changes.");
        }

        let mut prompt = TerminalPrompt {
            assume_yes: *overwrite,
        };
        let view = ctrl.enter_step(&mut store, step, &mut prompt)?;
        save_controller(&store, &ctrl)?;

        print!("{}", render_step(&view));
    }

    Ok(())
}
