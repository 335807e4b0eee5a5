use crate::cli::commands::{open_store, parse_field};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::completion::DistinctValues;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print one distinct value per line, suitable for shell completion.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Complete { field, prefix } = cmd {
        let field = parse_field(field)?;
        let store = open_store(cfg)?;
        let values = DistinctValues::load(&store, field)?;
        if values.is_empty() {
            info(format!("No {} values stored yet.", field));
            return Ok(());
        }

        for v in values.matching(prefix.as_deref().unwrap_or("")) {
            println!("{}", v);
        }
    }

    Ok(())
}
