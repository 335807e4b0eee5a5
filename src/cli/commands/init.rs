use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::ExerciseStore;
use crate::db::log::fdlog_quiet;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config file (unless in test mode)
///  - the data directory
///  - the SQLite database schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rFranklin…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let store = ExerciseStore::open_path(&db_path)?;
    let rows = store.row_count()?;

    println!("✅ Database initialized at {} ({} exercises)", &db_path, rows);

    fdlog_quiet(
        store.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rFranklin initialization completed!");
    Ok(())
}
