//! Export serializers for the estimate table.
//!
//! Both formats serialize the projected view (see [`crate::projection`]),
//! never the raw ledger, so exported figures are byte-for-byte the figures
//! that were on screen. File names, column captions and the sheet name are
//! fixed; nothing here is configurable.

mod delimited;
mod workbook;

pub use delimited::to_delimited;
pub use workbook::to_workbook;

use thiserror::Error;

/// Column captions shared by both export formats.
pub const HEADER: [&str; 9] = [
    "№",
    "Тип",
    "Ширина (см)",
    "Высота (см)",
    "Площадь (м²)",
    "Кол-во",
    "Режим",
    "Цена (руб)",
    "Стоимость (руб)",
];

/// Caption of the trailing total row.
pub const TOTAL_LABEL: &str = "Итого";

/// Fixed output file name for the delimited export.
pub const DELIMITED_FILE_NAME: &str = "Расчет.csv";

/// Fixed output file name for the workbook export.
pub const WORKBOOK_FILE_NAME: &str = "Расчет.xlsx";

/// Name of the single worksheet in the workbook export.
pub const SHEET_NAME: &str = "Смета";

/// Errors produced by the export serializers.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The ledger holds no items; no file is produced.
    #[error("no items to export")]
    EmptyLedger,

    /// CSV serialization failed.
    #[error("delimited serialization failed: {0}")]
    Delimited(#[from] csv::Error),

    /// The workbook container could not be assembled.
    #[error("workbook assembly failed: {0}")]
    Workbook(#[from] zip::result::ZipError),

    /// Writing into the in-memory buffer failed.
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
