use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::session::load_session;
use crate::errors::AppResult;
use crate::utils::formatting::{one_line, truncate};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let store = open_store(cfg)?;
        let rows = store.rows()?;

        if rows.is_empty() {
            println!("No exercises yet. Create one with `rfranklin new`.");
            return Ok(());
        }

        let selected = load_session(store.conn())?.row;
        let fields = cfg.list_fields();

        let mut columns = vec![Column {
            header: "#".to_string(),
            width: 0,
        }];
        columns.extend(fields.iter().map(|f| Column {
            header: f.name().to_string(),
            width: 0,
        }));

        let mut table = Table::new(columns);
        for (offset, ex) in rows.iter().enumerate() {
            let marker = if selected == Some(offset) { "*" } else { "" };
            let mut cells = vec![format!("{}{}", offset + 1, marker)];
            cells.extend(
                fields
                    .iter()
                    .map(|f| truncate(&one_line(ex.get(*f)), cfg.preview_width)),
            );
            table.add_row(cells);
        }
        table.fit();

        let separator = cfg.separator_char.chars().next().unwrap_or('-');
        print!("{}", table.render(separator));
    }

    Ok(())
}
