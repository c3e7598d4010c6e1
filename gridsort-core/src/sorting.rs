use crate::compare::SortKey;
use crate::extensions::SortExtensions;
use crate::models::{ColumnType, SortDirection, TableDocument};
use std::cmp::Reverse;
use unicode_normalization::UnicodeNormalization;

/// Fix a column's sort convention from its cells: a detector wins only when
/// every cell in the column matches it, so one stray text cell demotes the
/// whole column to the built-in ordering. An empty column has nothing to
/// detect on.
pub fn detect_column_type<S: AsRef<str>>(extensions: &SortExtensions, cells: &[S]) -> ColumnType {
    if cells.is_empty() {
        return ColumnType::Fallback;
    }

    for detector in extensions.detectors() {
        if cells.iter().all(|cell| detector.run(cell.as_ref()).is_some()) {
            return detector.tag();
        }
    }

    ColumnType::Fallback
}

/// Sort rows by one column, detecting its convention first. Returns the
/// convention the column sorted under. The sort is stable; detection runs
/// once, key extraction once per row.
pub fn sort_rows(
    extensions: &SortExtensions,
    rows: &mut [Vec<String>],
    column_index: usize,
    direction: SortDirection,
) -> ColumnType {
    let cells: Vec<&str> = rows.iter().map(|row| cell_text(row, column_index)).collect();
    let column_type = detect_column_type(extensions, &cells);
    sort_rows_as(extensions, rows, column_index, column_type, direction);
    column_type
}

/// Sort rows under an already-fixed convention (an explicit column override,
/// or a detection the host cached).
pub fn sort_rows_as(
    extensions: &SortExtensions,
    rows: &mut [Vec<String>],
    column_index: usize,
    column_type: ColumnType,
    direction: SortDirection,
) {
    if let Some(spec) = extensions.sort_spec(column_type) {
        match direction {
            SortDirection::Ascending => {
                rows.sort_by_cached_key(|row| spec.pre(cell_text(row, column_index)));
            }
            SortDirection::Descending => {
                rows.sort_by_cached_key(|row| Reverse(spec.pre(cell_text(row, column_index))));
            }
        }
        return;
    }

    // Built-in ordering: a column where every cell reads as a plain
    // dot-decimal number sorts numerically, anything else sorts as text.
    let all_numbers = !rows.is_empty()
        && rows
            .iter()
            .all(|row| cell_text(row, column_index).trim().parse::<f64>().is_ok());

    if all_numbers {
        match direction {
            SortDirection::Ascending => {
                rows.sort_by_cached_key(|row| builtin_number_key(cell_text(row, column_index)));
            }
            SortDirection::Descending => {
                rows.sort_by_cached_key(|row| {
                    Reverse(builtin_number_key(cell_text(row, column_index)))
                });
            }
        }
    } else {
        match direction {
            SortDirection::Ascending => {
                rows.sort_by_cached_key(|row| builtin_text_key(cell_text(row, column_index)));
            }
            SortDirection::Descending => {
                rows.sort_by_cached_key(|row| {
                    Reverse(builtin_text_key(cell_text(row, column_index)))
                });
            }
        }
    }
}

/// Sort a table document by the referenced column (name first, then numeric
/// index). Honors an explicit `sort_as` on the column. Returns the
/// convention used, or `None` when the reference matches no column.
pub fn sort_table(
    extensions: &SortExtensions,
    document: &mut TableDocument,
    column: &str,
    direction: SortDirection,
) -> Option<ColumnType> {
    let index = resolve_column(document, column)?;

    let column_type = match document.columns[index].sort_as {
        Some(declared) => {
            sort_rows_as(extensions, &mut document.rows, index, declared, direction);
            declared
        }
        None => sort_rows(extensions, &mut document.rows, index, direction),
    };

    Some(column_type)
}

/// Detected (or declared) sort convention of every column, in column order.
pub fn column_types(
    extensions: &SortExtensions,
    document: &TableDocument,
) -> Vec<(String, ColumnType)> {
    document
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let column_type = column.sort_as.unwrap_or_else(|| {
                let cells: Vec<&str> = document
                    .rows
                    .iter()
                    .map(|row| cell_text(row, index))
                    .collect();
                detect_column_type(extensions, &cells)
            });
            (column.name.clone(), column_type)
        })
        .collect()
}

/// Resolve a column reference: exact name match first, then a zero-based
/// numeric index.
pub fn resolve_column(document: &TableDocument, reference: &str) -> Option<usize> {
    if let Some(index) = document.columns.iter().position(|c| c.name == reference) {
        return Some(index);
    }
    reference
        .parse::<usize>()
        .ok()
        .filter(|&index| index < document.columns.len())
}

/// Collation key for the built-in text order: Unicode NFD, lowercased,
/// whitespace collapsed, with the raw cell as tiebreak.
pub fn collation_key(s: &str) -> String {
    let normalized: String = s.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn builtin_text_key(cell: &str) -> (String, String) {
    (collation_key(cell), cell.to_string())
}

fn builtin_number_key(cell: &str) -> SortKey {
    SortKey::new(cell.trim().parse().unwrap_or(f64::NAN))
}

/// A missing cell in a ragged row sorts like an empty string rather than
/// knocking the whole sort over.
fn cell_text(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
