//! Import pipeline errors with diagnostics

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort an import
///
/// Every variant aborts the whole batch; nothing is handed on for
/// submission once one of these is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum ImportError {
    #[error("CSV file must contain at least a header row and one data row")]
    #[diagnostic(
        code(srph::import::malformed),
        help("the first non-blank line is read as the header")
    )]
    MalformedInput,

    #[error("line {line}: found {found} columns, expected {expected}")]
    #[diagnostic(
        code(srph::import::column_count),
        help("values containing commas are not supported, even inside quotes")
    )]
    ColumnCountMismatch {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("line {line}: missing required field(s): {}", .fields.join(", "))]
    #[diagnostic(code(srph::import::missing_field))]
    MissingRequiredField {
        line: usize,
        fields: Vec<&'static str>,
    },

    #[error("no valid records found in CSV file")]
    #[diagnostic(code(srph::import::no_records))]
    NoRecordsFound,

    #[error("line {line}: invalid quantity '{value}'")]
    #[diagnostic(
        code(srph::import::quantity),
        help("quantity must be a whole number, or left empty for 1")
    )]
    InvalidQuantity { line: usize, value: String },

    #[error("Excel files are not supported. Please save your spreadsheet as CSV (Comma delimited) and import the .csv file.")]
    #[diagnostic(code(srph::import::spreadsheet))]
    SpreadsheetNotSupported,

    #[error("unsupported file type '{0}': only .csv files can be imported")]
    #[diagnostic(code(srph::import::file_type))]
    UnsupportedFileType(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(srph::import::io))]
    Io(#[from] std::io::Error),
}
