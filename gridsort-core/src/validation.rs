use crate::models::TableDocument;
use std::collections::HashSet;

/// Validate a table document's structure
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_table(document: &TableDocument) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if document.columns.is_empty() {
        errors.push("Table must define at least one column".to_string());
    }

    // Check column names are present and unique
    let mut seen = HashSet::new();
    for (idx, column) in document.columns.iter().enumerate() {
        if column.name.trim().is_empty() {
            errors.push(format!("Column #{} has an empty name", idx + 1));
        }
        if !seen.insert(&column.name) {
            errors.push(format!("Duplicate column name: '{}'", column.name));
        }
    }

    // Every row must be as wide as the column set
    let width = document.columns.len();
    for (idx, row) in document.rows.iter().enumerate() {
        if row.len() != width {
            errors.push(format!(
                "Row #{} has {} cells, expected {}",
                idx + 1,
                row.len(),
                width
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;
    use std::collections::HashMap;

    fn document(column_names: &[&str], rows: Vec<Vec<String>>) -> TableDocument {
        TableDocument {
            title: None,
            columns: column_names
                .iter()
                .map(|name| Column {
                    name: name.to_string(),
                    sort_as: None,
                })
                .collect(),
            rows,
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_well_formed_table_passes() {
        let doc = document(
            &["Description", "Amount"],
            vec![
                vec!["Taxi".to_string(), "12,50".to_string()],
                vec!["Hotel".to_string(), "1 240,00".to_string()],
            ],
        );

        assert!(validate_table(&doc).is_ok());
    }

    #[test]
    fn test_ragged_row_is_reported_with_its_index() {
        let doc = document(
            &["Description", "Amount"],
            vec![
                vec!["Taxi".to_string(), "12,50".to_string()],
                vec!["Hotel".to_string()],
            ],
        );

        let errors = validate_table(&doc).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Row #2"));
    }

    #[test]
    fn test_duplicate_column_names_are_rejected() {
        let doc = document(&["Amount", "Amount"], Vec::new());

        let errors = validate_table(&doc).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Duplicate column name")));
    }

    #[test]
    fn test_empty_column_name_is_rejected() {
        let doc = document(&["", "Amount"], Vec::new());

        let errors = validate_table(&doc).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("empty name")));
    }

    #[test]
    fn test_table_without_columns_is_rejected() {
        let doc = document(&[], Vec::new());

        let errors = validate_table(&doc).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("at least one column")));
    }
}
