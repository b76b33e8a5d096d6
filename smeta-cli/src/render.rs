//! Plain-text rendering of the projected estimate view.
//!
//! A pure projection-to-string step: the table can be rebuilt from the
//! ledger at any moment and carries no state of its own. Column captions are
//! the same ones the export formats use.

use smeta_core::export::{HEADER, SHEET_NAME, TOTAL_LABEL};
use smeta_core::projection::{DisplayRow, EstimateView};

/// Renders the view as a column-aligned text table with a trailing total
/// line.
pub fn table(view: &EstimateView) -> String {
    let mut rows: Vec<[String; 9]> = Vec::with_capacity(view.rows.len() + 1);
    rows.push(HEADER.map(str::to_string));
    for row in &view.rows {
        rows.push(row_cells(row));
    }

    let widths = column_widths(&rows);

    let mut out = String::new();
    for cells in &rows {
        out.push_str(&format_line(cells, &widths));
        out.push('\n');
    }
    out.push_str(&format!("{TOTAL_LABEL}: {}\n", view.total));
    out
}

/// Renders the print view: a title line followed by the table. Pagination is
/// left to whatever the output lands on.
pub fn print_view(view: &EstimateView) -> String {
    format!("{SHEET_NAME}\n\n{}", table(view))
}

fn row_cells(row: &DisplayRow) -> [String; 9] {
    [
        row.position.to_string(),
        row.label.clone(),
        row.width_cm.clone(),
        row.height_cm.clone(),
        row.area_m2.clone(),
        row.quantity.to_string(),
        row.mode_label.to_string(),
        row.unit_price.clone(),
        row.line_cost.clone(),
    ]
}

fn column_widths(rows: &[[String; 9]]) -> [usize; 9] {
    let mut widths = [0usize; 9];
    for cells in rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn format_line(
    cells: &[String; 9],
    widths: &[usize; 9],
) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // pad by chars, not bytes; Cyrillic captions are multi-byte
        for _ in cell.chars().count()..*width {
            line.push(' ');
        }
    }
    while line.ends_with(' ') {
        line.pop();
    }
    line
}
