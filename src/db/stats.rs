use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::db::session::load_session;
use crate::models::field::Field;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL EXERCISES
    //
    let count = count_rows(&pool.conn)?;
    println!(
        "{}• Total exercises:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) FILLED FIELDS PER COLUMN
    //
    println!("{}• Filled fields:{}", CYAN, RESET);
    for field in Field::ALL {
        let filled: i64 = pool.conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM {} WHERE {} IS NOT NULL AND {} <> ''",
                crate::db::migrate::EXERCISE_TABLE,
                field.name(),
                field.name()
            ),
            [],
            |row| row.get(0),
        )?;
        println!("    {:<11} {}/{}", field.name(), filled, count);
    }

    //
    // 4) SESSION
    //
    let session = load_session(&pool.conn)?;
    let selected = session
        .row
        .map(|r| format!("#{}", r + 1))
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Selected:{} {} ({})", CYAN, RESET, selected, session.step);

    println!();
    Ok(())
}
