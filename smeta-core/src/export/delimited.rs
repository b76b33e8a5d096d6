//! Delimited-text (CSV) serializer.
//!
//! ## File format
//!
//! * UTF-8 with a byte-order mark, so spreadsheet tools pick the right
//!   encoding when the file is double-clicked.
//! * Comma-separated, CRLF row terminator.
//! * Every field is double-quoted; quotes inside a field are doubled.
//! * Header row, one row per ledger item, a blank separator row, then the
//!   total row (`Итого` in the first cell, total in the cost column).

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::export::{ExportError, HEADER, TOTAL_LABEL};
use crate::projection::EstimateView;

/// UTF-8 byte-order mark.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Serializes the view as delimited text.
///
/// # Errors
///
/// [`ExportError::EmptyLedger`] when the view has no rows; no bytes are
/// produced in that case.
pub fn to_delimited(view: &EstimateView) -> Result<Vec<u8>, ExportError> {
    if view.rows.is_empty() {
        return Err(ExportError::EmptyLedger);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;

    for row in &view.rows {
        let position = row.position.to_string();
        let quantity = row.quantity.to_string();
        writer.write_record([
            position.as_str(),
            row.label.as_str(),
            row.width_cm.as_str(),
            row.height_cm.as_str(),
            row.area_m2.as_str(),
            quantity.as_str(),
            row.mode_label,
            row.unit_price.as_str(),
            row.line_cost.as_str(),
        ])?;
    }

    // Separator between the data and the total.
    writer.write_record([""; 9])?;
    writer.write_record([TOTAL_LABEL, "", "", "", "", "", "", "", view.total.as_str()])?;

    let body = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;

    let mut bytes = Vec::with_capacity(BOM.len() + body.len());
    bytes.extend_from_slice(BOM);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}
