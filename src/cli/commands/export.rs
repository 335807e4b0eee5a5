use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::log::fdlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let n = ExportLogic::export(&store, *format, Path::new(file), *force)?;

        fdlog_quiet(
            store.conn(),
            "export",
            file,
            &format!("{} exercises exported as {:?}", n, format),
        );
        success(format!("{} exercises exported to {}", n, file));
    }

    Ok(())
}
