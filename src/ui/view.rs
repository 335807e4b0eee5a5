//! Text rendering of the workflow state.

use crate::core::workflow::StepView;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::bold;

const WRAP: usize = 78;

/// Render the visible panels of a step, one block per field.
pub fn render_step(view: &StepView) -> String {
    let mut out = String::new();

    match view.selected {
        Some(offset) => out.push_str(&format!("Exercise #{} · {}\n", offset + 1, view.step)),
        None => {
            out.push_str(&format!("No exercise selected · {}\n", view.step));
            return out;
        }
    }

    if view.panels.is_empty() {
        out.push_str("\nRun `rfranklin jumble` to shuffle the notes, `rfranklin reveal` for the answer.\n");
        return out;
    }

    for panel in &view.panels {
        let mode = if panel.editable { "edit" } else { "read-only" };
        out.push('\n');
        out.push_str(&format!("{} [{}]\n", bold(panel.field.name()), mode));

        if panel.text.trim().is_empty() {
            out.push_str(&format!("  {GREY}(empty){RESET}\n"));
            continue;
        }

        let options = textwrap::Options::new(WRAP)
            .initial_indent("  ")
            .subsequent_indent("  ");
        for line in panel.text.lines() {
            if line.trim().is_empty() {
                out.push('\n');
            } else {
                out.push_str(&textwrap::fill(line, &options));
                out.push('\n');
            }
        }
    }

    out
}

/// Numbered tiles, one per line.
pub fn render_tiles(tiles: &[String]) -> String {
    let width = tiles.len().to_string().len();
    tiles
        .iter()
        .enumerate()
        .map(|(i, t)| format!("[{:>width$}] {}\n", i + 1, t, width = width))
        .collect()
}
