//! Plain-text rendering of a board snapshot.
//!
//! Pixel rectangles are scaled down to character cells, so the same layout
//! numbers drive both this renderer and a graphical one.

use crate::models::view_mode::{ViewMode, COLUMN_WIDTH_PX};
use crate::services::timeline::{BarRect, BoardSnapshot};

const BAR_GLYPH: char = '=';
const CONFLICT_GLYPH: char = '!';
const MIN_LABEL_WIDTH: usize = 12;

/// Header label for a column marker.
pub fn column_label(mode: ViewMode, date: chrono::NaiveDate) -> String {
    match mode {
        ViewMode::Day => date.format("%d %b").to_string(),
        ViewMode::Week => date.format("W/C %d %b").to_string(),
        ViewMode::Month => date.format("%b %Y").to_string(),
    }
}

/// Character span `[start, end)` covered by `rect`, clipped to `cells`.
/// `None` when the bar is entirely outside the window.
pub fn bar_cells(rect: &BarRect, chars_per_column: usize, cells: usize) -> Option<(usize, usize)> {
    if cells == 0 || chars_per_column == 0 {
        return None;
    }
    let per_column = chars_per_column as f64;
    if !rect.intersects(cells as f64 * COLUMN_WIDTH_PX / per_column) {
        return None;
    }

    let start = (rect.left * per_column / COLUMN_WIDTH_PX).floor().max(0.0) as usize;
    let end = (rect.right() * per_column / COLUMN_WIDTH_PX).ceil().max(0.0) as usize;
    let start = start.min(cells - 1);
    let end = end.min(cells).max(start + 1);
    Some((start, end))
}

/// Render the board as a text grid: a header of column labels, then one
/// line per work center with its bars. Conflicting bars use `!`.
pub fn render_board(snapshot: &BoardSnapshot, chars_per_column: usize) -> String {
    let label_width = snapshot
        .rows
        .iter()
        .map(|row| row.work_center.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_LABEL_WIDTH);
    let cells = snapshot.columns.len() * chars_per_column;

    let mut out = String::new();
    out.push_str(&format!("{:label_width$} |", snapshot.view_mode.label()));
    for date in &snapshot.columns {
        let label: String = column_label(snapshot.view_mode, *date)
            .chars()
            .take(chars_per_column.saturating_sub(1))
            .collect();
        out.push_str(&format!("{label:chars_per_column$}"));
    }
    out.push('\n');
    out.push_str(&format!("{}-+{}\n", "-".repeat(label_width), "-".repeat(cells)));

    for row in &snapshot.rows {
        let mut line = vec![' '; cells];
        for bar in &row.bars {
            let Some((start, end)) = bar_cells(&bar.rect, chars_per_column, cells) else {
                continue;
            };
            let glyph = if bar.in_conflict { CONFLICT_GLYPH } else { BAR_GLYPH };
            for cell in &mut line[start..end] {
                // Keep conflict marks visible where bars overlap
                if *cell != CONFLICT_GLYPH {
                    *cell = glyph;
                }
            }
        }
        let line: String = line.into_iter().collect();
        out.push_str(&format!(
            "{:label_width$} |{}\n",
            row.work_center.name,
            line.trim_end()
        ));
    }

    out
}

/// One line per conflicting order, or a note that there are none.
pub fn render_conflicts(snapshot: &BoardSnapshot) -> String {
    if snapshot.conflicts.is_empty() {
        return "No scheduling conflicts.\n".to_string();
    }

    let mut out = format!("{} order(s) in conflict:\n", snapshot.conflicts.len());
    for id in snapshot.sorted_conflicts() {
        let placed = snapshot
            .rows
            .iter()
            .flat_map(|row| row.bars.iter().map(move |bar| (row, bar)))
            .find(|(_, bar)| bar.order.id == id);

        match placed {
            Some((row, bar)) => out.push_str(&format!(
                "  {id}  {} [{}] on {} ({} - {})\n",
                bar.order.name,
                bar.order.status.label(),
                row.work_center.name,
                bar.order.start_date,
                bar.order.end_date
            )),
            None => out.push_str(&format!("  {id}\n")),
        }
    }
    out
}
