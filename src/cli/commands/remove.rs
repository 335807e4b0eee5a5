use crate::cli::commands::{load_controller, open_store, row_to_offset, save_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::StoreEvent;
use crate::db::log::fdlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, success};
use std::cell::RefCell;
use std::rc::Rc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Remove { row, force } = cmd {
        let offset = row_to_offset(*row)?;
        let mut store = open_store(cfg)?;

        let exercise = store.get_row(offset)?.ok_or(AppError::InvalidRow(*row))?;
        let label = if exercise.author.is_empty() && exercise.source.is_empty() {
            format!("#{}", row)
        } else {
            format!("#{} ({} / {})", row, exercise.author, exercise.source)
        };

        if !force
            && !ask_confirmation(&format!(
                "Remove exercise {}? This action is irreversible.",
                label
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut ctrl = load_controller(&store)?;

        // the controller follows row compaction through the store events
        let events: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
        let sink = Rc::clone(&events);
        let sub = store.subscribe(move |ev| sink.borrow_mut().push(*ev));

        let removed = store.remove_row(offset)?;
        store.unsubscribe(sub);

        if !removed {
            return Err(AppError::InvalidRow(*row));
        }

        for ev in events.borrow().iter() {
            ctrl.on_store_event(ev);
        }
        save_controller(&store, &ctrl)?;

        fdlog_quiet(store.conn(), "del", &label, "Exercise removed");
        success(format!("Exercise {} has been removed.", label));
    }

    Ok(())
}
