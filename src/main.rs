//! rFranklin main entrypoint.

use rfranklin::run;
use rfranklin::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
