use std::io::{self, Write};

use starship_core::{AppViewModel, SessionState, StopsRowView};

const NAME_HEADER: &str = "Starship";
const STOPS_HEADER: &str = "Stops";

pub fn render(view: &AppViewModel, out: &mut impl Write) -> io::Result<()> {
    match view.session {
        SessionState::Idle => Ok(()),
        SessionState::Loading => match (&view.progress_label, view.progress_percent) {
            (Some(label), Some(percent)) => writeln!(out, "{label} [{percent:>3}%]"),
            _ => writeln!(out, "Loading starships..."),
        },
        SessionState::Ready if view.rows.is_empty() => match &view.progress_label {
            Some(label) => writeln!(out, "{label}"),
            None => writeln!(out, "No starships loaded."),
        },
        SessionState::Ready => render_table(&view.distance, &view.rows, out),
        SessionState::Failed => writeln!(
            out,
            "Failed to load starships: {}",
            view.error_message.as_deref().unwrap_or("unknown error")
        ),
    }
}

fn render_table(distance: &str, rows: &[StopsRowView], out: &mut impl Write) -> io::Result<()> {
    let cells: Vec<String> = rows.iter().map(|row| row.stops.to_string()).collect();
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or_default();
    let stops_width = cells
        .iter()
        .map(|cell| cell.chars().count())
        .chain([STOPS_HEADER.len()])
        .max()
        .unwrap_or_default();

    writeln!(out, "Stops needed for {} MGLT:", distance.trim())?;
    writeln!(out, "{NAME_HEADER:<name_width$}  {STOPS_HEADER:>stops_width$}")?;
    for (row, cell) in rows.iter().zip(&cells) {
        if row.stops.is_numeric() {
            writeln!(out, "{:<name_width$}  {cell:>stops_width$}", row.name)?;
        } else {
            writeln!(out, "{:<name_width$}  {cell:<stops_width$}", row.name)?;
        }
    }
    Ok(())
}
