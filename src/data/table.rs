//! CSV loading with fail-fast schema validation
//!
//! Edge tables come in two header schemas:
//! - `ingredient1, ingredient2, popularity`
//! - `ingredients, variable, value` (the melted co-occurrence matrix)
//!
//! Occurrence matrices have one key column (`Cuisine`, or `CODE`), an
//! optional label column (`region`) and one numeric column per ingredient.

use super::edge::EdgeRecord;
use crate::error::{DashboardError, DashboardResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Names of the three edge columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeColumns {
    pub source: String,
    pub target: String,
    pub weight: String,
}

impl EdgeColumns {
    pub fn new(source: &str, target: &str, weight: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            weight: weight.to_string(),
        }
    }

    /// Header schemas recognized without configuration
    pub fn known() -> [EdgeColumns; 2] {
        [
            EdgeColumns::new("ingredient1", "ingredient2", "popularity"),
            EdgeColumns::new("ingredients", "variable", "value"),
        ]
    }

    /// Pick the first known schema fully present in `headers`
    pub fn detect(headers: &csv::StringRecord) -> Option<EdgeColumns> {
        Self::known()
            .into_iter()
            .find(|c| c.missing(headers).is_empty())
    }

    fn missing(&self, headers: &csv::StringRecord) -> Vec<String> {
        [&self.source, &self.target, &self.weight]
            .into_iter()
            .filter(|name| column_index(headers, name).is_none())
            .cloned()
            .collect()
    }
}

/// Read an edge table.
///
/// `columns` overrides header detection. `input` names the source in
/// error messages. An input without a header yields no rows.
pub fn load_edges<R: Read>(reader: R, columns: Option<&EdgeColumns>, input: &str) -> DashboardResult<Vec<EdgeRecord>> {
    let mut csv_reader = csv_reader(reader);
    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let columns = match columns {
        Some(c) => c.clone(),
        None => EdgeColumns::detect(&headers).ok_or_else(|| DashboardError::MalformedSchema {
            input: input.to_string(),
            missing: EdgeColumns::known()[0].missing(&headers),
        })?,
    };

    let missing = columns.missing(&headers);
    if !missing.is_empty() {
        return Err(DashboardError::MalformedSchema {
            input: input.to_string(),
            missing,
        });
    }

    for name in [&columns.source, &columns.target, &columns.weight] {
        if headers.iter().filter(|h| h == name).count() > 1 {
            return Err(DashboardError::DuplicateColumn {
                input: input.to_string(),
                column: name.clone(),
            });
        }
    }

    // Indices are present after the check above
    let source_idx = column_index(&headers, &columns.source).unwrap_or_default();
    let target_idx = column_index(&headers, &columns.target).unwrap_or_default();
    let weight_idx = column_index(&headers, &columns.weight).unwrap_or_default();

    let mut edges = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        check_row_len(&record, headers.len(), row, input)?;
        let raw = record.get(weight_idx).unwrap_or("");
        let weight = match raw.parse::<f64>() {
            Ok(w) if w.is_finite() && w >= 0.0 => w,
            _ => {
                return Err(DashboardError::InvalidWeight {
                    input: input.to_string(),
                    row,
                    value: raw.to_string(),
                })
            }
        };

        edges.push(EdgeRecord::new(
            record.get(source_idx).unwrap_or(""),
            record.get(target_idx).unwrap_or(""),
            weight,
        ));
    }

    debug!("Loaded {} edges from {}", edges.len(), input);
    Ok(edges)
}

/// Read an edge table from a file
pub fn load_edges_from_path(path: impl AsRef<Path>, columns: Option<&EdgeColumns>) -> DashboardResult<Vec<EdgeRecord>> {
    let path = path.as_ref();
    load_edges(open(path)?, columns, &path.display().to_string())
}

/// Ingredient values per row key (cuisine or country code)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OccurrenceMatrix {
    /// Row keys in file order
    pub keys: Vec<String>,
    /// Row labels aligned with `keys`, when a label column was read
    pub labels: Option<Vec<String>>,
    /// Ingredient name -> values aligned with `keys`
    pub columns: IndexMap<String, Vec<f64>>,
}

impl OccurrenceMatrix {
    /// Values of one ingredient, aligned with `keys`
    pub fn column(&self, ingredient: &str) -> Option<&[f64]> {
        self.columns.get(ingredient).map(|v| v.as_slice())
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.keys.len()
    }

    /// Label of row `idx`, falling back to its key
    pub fn label(&self, idx: usize) -> &str {
        self.labels
            .as_ref()
            .and_then(|l| l.get(idx))
            .unwrap_or(&self.keys[idx])
    }
}

/// Read an occurrence matrix.
///
/// `key_column` is required. `label_column`, when given, is required too.
/// Empty cells read as `0.0`.
pub fn load_matrix<R: Read>(
    reader: R,
    key_column: &str,
    label_column: Option<&str>,
    input: &str,
) -> DashboardResult<OccurrenceMatrix> {
    let mut csv_reader = csv_reader(reader);
    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(OccurrenceMatrix::default());
    }

    let mut missing = Vec::new();
    let key_idx = column_index(&headers, key_column);
    if key_idx.is_none() {
        missing.push(key_column.to_string());
    }
    let label_idx = label_column.map(|name| (name, column_index(&headers, name)));
    if let Some((name, None)) = label_idx {
        missing.push(name.to_string());
    }
    let (Some(key_idx), true) = (key_idx, missing.is_empty()) else {
        return Err(DashboardError::MalformedSchema {
            input: input.to_string(),
            missing,
        });
    };
    let label_idx = label_idx.and_then(|(_, idx)| idx);
    check_unique(&headers, input)?;

    // Every other column is an ingredient
    let ingredient_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != key_idx && Some(*i) != label_idx)
        .map(|(i, name)| (i, name.to_string()))
        .collect();

    let mut matrix = OccurrenceMatrix {
        labels: label_idx.map(|_| Vec::new()),
        columns: ingredient_cols
            .iter()
            .map(|(_, name)| (name.clone(), Vec::new()))
            .collect(),
        ..Default::default()
    };

    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        check_row_len(&record, headers.len(), row, input)?;
        matrix.keys.push(record.get(key_idx).unwrap_or("").to_string());
        if let (Some(labels), Some(idx)) = (matrix.labels.as_mut(), label_idx) {
            labels.push(record.get(idx).unwrap_or("").to_string());
        }

        for (idx, name) in &ingredient_cols {
            let raw = record.get(*idx).unwrap_or("");
            let value = parse_cell(raw).ok_or_else(|| DashboardError::InvalidValue {
                input: input.to_string(),
                row,
                column: name.clone(),
                value: raw.to_string(),
            })?;
            if let Some(values) = matrix.columns.get_mut(name) {
                values.push(value);
            }
        }
    }

    debug!(
        "Loaded {} rows x {} ingredients from {}",
        matrix.row_count(),
        matrix.columns.len(),
        input
    );
    Ok(matrix)
}

/// Read an occurrence matrix from a file
pub fn load_matrix_from_path(
    path: impl AsRef<Path>,
    key_column: &str,
    label_column: Option<&str>,
) -> DashboardResult<OccurrenceMatrix> {
    let path = path.as_ref();
    load_matrix(open(path)?, key_column, label_column, &path.display().to_string())
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn check_unique(headers: &csv::StringRecord, input: &str) -> DashboardResult<()> {
    let mut seen = indexmap::IndexSet::new();
    for name in headers.iter() {
        if !seen.insert(name) {
            return Err(DashboardError::DuplicateColumn {
                input: input.to_string(),
                column: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Longer rows are accepted; trailing extra fields are ignored
fn check_row_len(record: &csv::StringRecord, expected: usize, row: usize, input: &str) -> DashboardResult<()> {
    if record.len() < expected {
        return Err(DashboardError::ShortRow {
            input: input.to_string(),
            row,
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

fn parse_cell(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn open(path: &Path) -> DashboardResult<File> {
    File::open(path).map_err(|source| DashboardError::Io {
        path: path.display().to_string(),
        source,
    })
}
