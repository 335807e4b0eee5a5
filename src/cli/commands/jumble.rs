use crate::cli::commands::{load_controller, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::jumble::Jumble;
use crate::errors::{AppError, AppResult};
use crate::models::step::Step;
use crate::ui::messages::{header, info, warning};
use crate::ui::view::render_tiles;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// `jumble` and `reveal`: the tiles and the answer key.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Jumble { seed } => {
            let store = open_store(cfg)?;
            let ctrl = load_controller(&store)?;
            if ctrl.selected().is_none() {
                return Err(AppError::NoSelection);
            }
            warn_outside_jumble_step(ctrl.step());

            let jumble: Jumble = match seed {
                Some(s) => ctrl.jumble(&mut StdRng::seed_from_u64(*s)),
                None => ctrl.jumble(&mut rand::rng()),
            };

            if jumble.is_empty() {
                info("The notes are empty: nothing to jumble.");
                return Ok(());
            }

            header("Jumble");
            print!("{}", render_tiles(jumble.tiles()));
        }
        Commands::Reveal => {
            let store = open_store(cfg)?;
            let ctrl = load_controller(&store)?;
            if ctrl.selected().is_none() {
                return Err(AppError::NoSelection);
            }
            warn_outside_jumble_step(ctrl.step());

            let lines = ctrl.reveal();
            if lines.is_empty() {
                info("The notes are empty: nothing to reveal.");
                return Ok(());
            }

            header("Answer");
            print!("{}", render_tiles(&lines));
        }
        _ => {}
    }

    Ok(())
}

fn warn_outside_jumble_step(step: Step) {
    if step != Step::Jumble {
        warning(format!(
            "Currently at \"{}\", not at step 6 (use `step 6` to play the jumble).",
            step.title()
        ));
    }
}
