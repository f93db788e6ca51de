//! Mapping file parser.
//!
//! The mapping file is comma-separated text whose first non-blank line is a
//! header starting with [`MAPPING_HEADER`]. Every following non-blank line
//! describes one docking job. Rows are validated independently so that all
//! problems can be reported in a single pass.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::domain::AppError;

/// Column prologue the mapping header must start with.
pub const MAPPING_HEADER: &str = "NUM, RECEPTOR, LIGAND, xc, yc, zc, xs, ys, zs";

/// Number of comma-separated fields in a data row.
pub const MAPPING_FIELDS: usize = 9;

const BOX_FIELDS: [&str; 6] = ["center_x", "center_y", "center_z", "size_x", "size_y", "size_z"];

/// One docking job described by the mapping file.
///
/// Box values keep their literal text so that they reach the config file
/// exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    /// 1-based line number in the mapping file.
    pub line: usize,
    pub id: u64,
    pub receptor: String,
    pub ligand: String,
    pub center: [String; 3],
    pub size: [String; 3],
}

/// Why a data row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("id '{0}' is not a non-negative integer")]
    InvalidId(String),

    #[error("{field} value '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} is empty")]
    EmptyField { field: &'static str },

    #[error("id {id} already used on line {first_line}")]
    DuplicateId { id: u64, first_line: usize },
}

/// A rejected data row with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: usize,
    pub kind: RowErrorKind,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for RowError {}

/// Result of parsing a mapping file: valid rows in file order plus every
/// row-level error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingParse {
    pub rows: Vec<MappingRow>,
    pub errors: Vec<RowError>,
}

impl MappingParse {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse mapping file content.
///
/// Fails only when the header is missing or wrong; row problems are collected
/// in [`MappingParse::errors`].
pub fn parse_mapping(content: &str) -> Result<MappingParse, AppError> {
    let mut lines = content.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

    let header = lines.next().map(|(_, line)| line).unwrap_or_default();
    let header = header.strip_prefix('\u{feff}').unwrap_or(header);
    if !header.starts_with(MAPPING_HEADER) {
        return Err(AppError::MappingHeader {
            expected: MAPPING_HEADER,
            found: header.trim_end().to_string(),
        });
    }

    let mut parsed = MappingParse::default();
    let mut seen: HashMap<u64, usize> = HashMap::new();

    for (index, line) in lines {
        let line_no = index + 1;
        match parse_row(line_no, line) {
            Ok(row) => {
                if let Some(&first_line) = seen.get(&row.id) {
                    parsed.errors.push(RowError {
                        line: line_no,
                        kind: RowErrorKind::DuplicateId { id: row.id, first_line },
                    });
                    continue;
                }
                seen.insert(row.id, line_no);
                parsed.rows.push(row);
            }
            Err(kind) => parsed.errors.push(RowError { line: line_no, kind }),
        }
    }

    Ok(parsed)
}

fn parse_row(line_no: usize, line: &str) -> Result<MappingRow, RowErrorKind> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if fields.len() != MAPPING_FIELDS {
        return Err(RowErrorKind::FieldCount { expected: MAPPING_FIELDS, found: fields.len() });
    }

    let id = fields[0].parse::<u64>().map_err(|_| RowErrorKind::InvalidId(fields[0].to_string()))?;

    let receptor = non_empty("receptor", fields[1])?;
    let ligand = non_empty("ligand", fields[2])?;

    for (field, value) in BOX_FIELDS.into_iter().zip(&fields[3..]) {
        if value.parse::<f64>().is_err() {
            return Err(RowErrorKind::InvalidNumber { field, value: value.to_string() });
        }
    }

    Ok(MappingRow {
        line: line_no,
        id,
        receptor,
        ligand,
        center: [fields[3].to_string(), fields[4].to_string(), fields[5].to_string()],
        size: [fields[6].to_string(), fields[7].to_string(), fields[8].to_string()],
    })
}

fn non_empty(field: &'static str, value: &str) -> Result<String, RowErrorKind> {
    if value.is_empty() {
        return Err(RowErrorKind::EmptyField { field });
    }
    Ok(value.to_string())
}
