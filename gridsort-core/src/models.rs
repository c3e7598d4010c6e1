use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The data-formatting convention a column sorts under.
///
/// `Fallback` (wire name `none`) means no custom convention applies and the
/// host's built-in string/number ordering takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Comma-as-decimal-separator numbers: "1,5", "1 234,56", "-" / "—" placeholders
    #[serde(rename = "numeric-comma")]
    NumericComma,
    /// Comma-decimal numbers wrapped in markup: "<b>2,5</b>"
    #[serde(rename = "numeric-html")]
    NumericHtml,
    /// Integers carried in a title="..." attribute, e.g. dates rendered
    /// human-readable with a sortable Ymd value hidden in the title
    #[serde(rename = "title-numeric")]
    TitleNumeric,
    /// No custom convention; host default ordering applies
    #[serde(rename = "none")]
    Fallback,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::NumericComma => "numeric-comma",
            ColumnType::NumericHtml => "numeric-html",
            ColumnType::TitleNumeric => "title-numeric",
            ColumnType::Fallback => "none",
        };
        write!(f, "{}", name)
    }
}

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One column of a table document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Column {
    pub name: String,
    /// Explicit sort convention; when present, type detection is skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_as: Option<ColumnType>,
}

/// A table document as loaded from disk: column definitions plus rows of
/// raw cell strings (which may contain markup).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TableDocument {
    pub title: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
