//! Single-sheet spreadsheet workbook serializer.
//!
//! An `.xlsx` workbook is a ZIP container of XML parts. The serializer
//! assembles the minimal set of parts directly: content types, the package
//! and workbook relationships, the workbook with its one named sheet, and
//! the sheet data itself. Text cells are written as inline strings; numeric
//! cells carry the already-formatted figures from the projected view, so the
//! workbook shows exactly what the table showed.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::export::{ExportError, HEADER, SHEET_NAME, TOTAL_LABEL};
use crate::projection::{DisplayRow, EstimateView};

/// Serializes the view as a single-sheet workbook.
///
/// # Errors
///
/// [`ExportError::EmptyLedger`] when the view has no rows; no bytes are
/// produced in that case.
pub fn to_workbook(view: &EstimateView) -> Result<Vec<u8>, ExportError> {
    if view.rows.is_empty() {
        return Err(ExportError::EmptyLedger);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", PACKAGE_RELS.to_string()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(view)),
    ];

    for (name, body) in parts {
        writer.start_file(name, options)?;
        writer.write_all(body.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>";

const CONTENT_TYPES: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\
<Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\
</Types>";

const PACKAGE_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>\
</Relationships>";

const WORKBOOK_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>\
</Relationships>";

fn workbook_xml() -> String {
    format!(
        "{XML_DECL}\
<workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
<sheets><sheet name=\"{}\" sheetId=\"1\" r:id=\"rId1\"/></sheets>\
</workbook>",
        escape_xml(SHEET_NAME)
    )
}

fn sheet_xml(view: &EstimateView) -> String {
    let mut rows = String::new();
    rows.push_str(&header_row());
    for row in &view.rows {
        rows.push_str(&data_row(row));
    }
    rows.push_str(&total_row(&view.total));

    format!(
        "{XML_DECL}\
<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
<sheetData>{rows}</sheetData>\
</worksheet>"
    )
}

fn header_row() -> String {
    let cells: String = HEADER.iter().map(|caption| string_cell(caption)).collect();
    format!("<row>{cells}</row>")
}

fn data_row(row: &DisplayRow) -> String {
    let cells = [
        number_cell(&row.position.to_string()),
        string_cell(&row.label),
        number_cell(&row.width_cm),
        number_cell(&row.height_cm),
        number_cell(&row.area_m2),
        number_cell(&row.quantity.to_string()),
        string_cell(row.mode_label),
        number_cell(&row.unit_price),
        number_cell(&row.line_cost),
    ]
    .concat();
    format!("<row>{cells}</row>")
}

fn total_row(total: &str) -> String {
    let blanks: String = (0..7).map(|_| string_cell("")).collect();
    format!(
        "<row>{}{}{}</row>",
        string_cell(TOTAL_LABEL),
        blanks,
        number_cell(total)
    )
}

fn string_cell(text: &str) -> String {
    format!("<c t=\"inlineStr\"><is><t>{}</t></is></c>", escape_xml(text))
}

/// The view only ever produces plain decimal text for numeric columns, so
/// the value goes in unescaped.
fn number_cell(value: &str) -> String {
    format!("<c><v>{value}</v></c>")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use pretty_assertions::assert_eq;
    use zip::ZipArchive;

    use super::*;
    use crate::admission::{LineItemDraft, admit};
    use crate::models::{Ledger, PricingMode};
    use crate::projection::project;

    fn sample_view() -> EstimateView {
        let mut ledger = Ledger::new();
        admit(
            &mut ledger,
            &LineItemDraft {
                item_type: "Дверь".to_string(),
                width_cm: "90".to_string(),
                height_cm: "200".to_string(),
                quantity: "4".to_string(),
                unit_price: "600".to_string(),
                pricing_mode: PricingMode::Fixed,
            },
        )
        .unwrap();
        admit(
            &mut ledger,
            &LineItemDraft {
                item_type: "Окно".to_string(),
                width_cm: "180".to_string(),
                height_cm: "150".to_string(),
                quantity: "6".to_string(),
                unit_price: "300".to_string(),
                pricing_mode: PricingMode::PerArea,
            },
        )
        .unwrap();
        project(&ledger)
    }

    fn read_part(
        bytes: &[u8],
        name: &str,
    ) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn empty_view_is_refused() {
        let view = project(&Ledger::new());

        let result = to_workbook(&view);

        assert!(matches!(result, Err(ExportError::EmptyLedger)));
    }

    #[test]
    fn output_is_a_zip_container_with_the_expected_parts() {
        let bytes = to_workbook(&sample_view()).unwrap();

        assert_eq!(&bytes[..2], b"PK");

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "[Content_Types].xml".to_string(),
                "_rels/.rels".to_string(),
                "xl/_rels/workbook.xml.rels".to_string(),
                "xl/workbook.xml".to_string(),
                "xl/worksheets/sheet1.xml".to_string(),
            ]
        );
    }

    #[test]
    fn workbook_declares_the_named_sheet() {
        let bytes = to_workbook(&sample_view()).unwrap();

        let workbook = read_part(&bytes, "xl/workbook.xml");

        assert!(workbook.contains("<sheet name=\"Смета\" sheetId=\"1\""));
    }

    #[test]
    fn sheet_carries_the_displayed_figures() {
        let bytes = to_workbook(&sample_view()).unwrap();

        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains("<t>Дверь</t>"));
        assert!(sheet.contains("<v>2400.00</v>"));
        assert!(sheet.contains("<v>2.700</v>"));
        assert!(sheet.contains("<t>за м²</t>"));
    }

    #[test]
    fn sheet_ends_with_the_total_row() {
        let bytes = to_workbook(&sample_view()).unwrap();

        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains("<t>Итого</t>"));
        assert!(sheet.contains("<v>7260.00</v>"));
    }

    #[test]
    fn header_captions_are_present() {
        let bytes = to_workbook(&sample_view()).unwrap();

        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains("<t>Стоимость (руб)</t>"));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let mut ledger = Ledger::new();
        admit(
            &mut ledger,
            &LineItemDraft {
                item_type: "Профиль <60>".to_string(),
                width_cm: String::new(),
                height_cm: String::new(),
                quantity: "1".to_string(),
                unit_price: "10".to_string(),
                pricing_mode: PricingMode::Fixed,
            },
        )
        .unwrap();

        let bytes = to_workbook(&project(&ledger)).unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains("<t>Профиль &lt;60&gt;</t>"));
        assert!(!sheet.contains("<t>Профиль <60></t>"));
    }
}
