//! Common utilities for CSV import
//!
//! Splits raw text into rows, resolves header aliases and builds one
//! [`RawRecord`] per data row. Entity-specific normalization lives in the
//! sibling modules.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::error::ImportError;
use crate::core::EntityKind;

/// One tokenized line of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based physical line number in the source text
    pub line: usize,
    pub cells: Vec<String>,
}

/// Header row plus the data rows that follow it
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    pub header: RawRow,
    pub rows: Vec<RawRow>,
}

/// Fixed import rules for one entity kind
#[derive(Debug)]
pub struct ImportSchema {
    pub kind: EntityKind,
    /// Lower-cased header spelling -> canonical field name
    pub aliases: &'static [(&'static str, &'static str)],
    /// Fields every record must carry
    pub required: &'static [&'static str],
    /// Keep unknown headers as custom fields instead of dropping them
    pub keep_unknown: bool,
    /// Fail with [`ImportError::NoRecordsFound`] when no record is built
    pub reject_empty: bool,
}

impl ImportSchema {
    /// Look up the canonical field for a header spelling
    pub fn resolve(&self, header: &str) -> Option<&'static str> {
        let key = header.trim().to_lowercase();
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, field)| *field)
    }
}

/// Where the values of one column go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderField {
    Canonical(&'static str),
    Custom(String),
    Ignored,
}

/// Positional mapping from header columns to fields
#[derive(Debug, Clone)]
pub struct HeaderMap {
    fields: Vec<HeaderField>,
}

impl HeaderMap {
    /// Resolve every header cell against the schema's alias table
    pub fn build(headers: &[String], schema: &ImportSchema) -> Self {
        let fields = headers
            .iter()
            .map(|h| match schema.resolve(h) {
                Some(field) => HeaderField::Canonical(field),
                None => {
                    let name = h.trim().to_lowercase();
                    if schema.keep_unknown && !name.is_empty() {
                        HeaderField::Custom(name)
                    } else {
                        HeaderField::Ignored
                    }
                }
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[HeaderField] {
        &self.fields
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    /// Build a record from a row; empty cells are left out
    pub fn apply(&self, row: &RawRow, index: usize) -> RawRecord {
        let mut record = RawRecord {
            line: row.line,
            index,
            fields: HashMap::new(),
            custom: BTreeMap::new(),
        };

        for (field, cell) in self.fields.iter().zip(&row.cells) {
            let value = cell.trim();
            if value.is_empty() {
                continue;
            }
            match field {
                HeaderField::Canonical(name) => {
                    record.fields.insert(*name, value.to_string());
                }
                HeaderField::Custom(name) => {
                    record.custom.insert(name.clone(), value.to_string());
                }
                HeaderField::Ignored => {}
            }
        }

        record
    }
}

/// A data row keyed by canonical field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based source line
    pub line: usize,
    /// 1-based position among the data records
    pub index: usize,
    fields: HashMap<&'static str, String>,
    /// Unrecognised columns (asset imports only)
    pub custom: BTreeMap<String, String>,
}

impl RawRecord {
    /// Get a field value; never returns an empty string
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Get an owned field value
    pub fn field(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Get a field value or a fixed default
    pub fn field_or(&self, field: &str, default: &str) -> String {
        self.get(field).unwrap_or(default).to_string()
    }
}

/// Trim a cell and strip one layer of enclosing double quotes
pub fn clean_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Split text into a header row and data rows
///
/// Lines are split on every comma, quoted or not; a value containing a
/// comma shifts the columns and trips the column count check. Whitespace-only
/// lines are skipped.
pub fn tokenize(text: &str) -> Result<ParsedCsv, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<RawRow> = text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| RawRow {
            line: i + 1,
            cells: line.split(',').map(clean_cell).collect(),
        })
        .collect();

    let mut lines = lines.into_iter();
    let header = lines.next().ok_or(ImportError::MalformedInput)?;
    let rows: Vec<RawRow> = lines.collect();
    if rows.is_empty() {
        return Err(ImportError::MalformedInput);
    }

    let expected = header.cells.len();
    if let Some(row) = rows.iter().find(|r| r.cells.len() != expected) {
        return Err(ImportError::ColumnCountMismatch {
            line: row.line,
            found: row.cells.len(),
            expected,
        });
    }

    Ok(ParsedCsv { header, rows })
}

/// Tokenize, resolve headers and build validated records for one kind
pub fn build_records(text: &str, schema: &ImportSchema) -> Result<Vec<RawRecord>, ImportError> {
    records_from(&tokenize(text)?, schema)
}

/// Resolve headers and build validated records from tokenized rows
pub fn records_from(parsed: &ParsedCsv, schema: &ImportSchema) -> Result<Vec<RawRecord>, ImportError> {
    let header_map = HeaderMap::build(&parsed.header.cells, schema);

    let records: Vec<RawRecord> = parsed
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| header_map.apply(row, i + 1))
        .collect();

    tracing::debug!(
        kind = %schema.kind,
        columns = header_map.len(),
        records = records.len(),
        "built raw records"
    );

    // tokenize never yields zero rows; this covers callers that build
    // ParsedCsv themselves
    if schema.reject_empty && records.is_empty() {
        return Err(ImportError::NoRecordsFound);
    }

    for record in &records {
        let missing: Vec<&'static str> = schema
            .required
            .iter()
            .copied()
            .filter(|f| !record.has(f))
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::MissingRequiredField {
                line: record.line,
                fields: missing,
            });
        }
    }

    Ok(records)
}

/// Parse the `quantity` field; absent means 1
pub fn parse_quantity(record: &RawRecord) -> Result<u32, ImportError> {
    match record.get("quantity") {
        None => Ok(1),
        Some(value) => value.parse().map_err(|_| ImportError::InvalidQuantity {
            line: record.line,
            value: value.to_string(),
        }),
    }
}

/// Read an import file, refusing anything that is not CSV
pub fn read_import_file(path: &Path) -> Result<String, ImportError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(std::fs::read_to_string(path)?),
        "xlsx" | "xls" => Err(ImportError::SpreadsheetNotSupported),
        other => Err(ImportError::UnsupportedFileType(other.to_string())),
    }
}

/// Import outcome, shaped like the submission API's response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total: usize,
    pub successful: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<usize>,
    pub failed: usize,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ImportSummary {
    /// Summary for a batch that normalized without errors
    pub fn all_successful(total: usize) -> Self {
        Self {
            total,
            successful: total,
            ..Default::default()
        }
    }
}
