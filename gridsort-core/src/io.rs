use crate::models::TableDocument;
use crate::schema_validation::validate_document;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a table document from a JSON file, gating it through the document
/// schema before deserializing
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<TableDocument, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;

    validate_document(&value)
        .map_err(|errors| format!("Schema validation failed:\n{}", errors.join("\n")))?;

    let document: TableDocument = serde_json::from_value(value)?;
    Ok(document)
}

/// Save a table document to a JSON file with pretty printing
pub fn save_table<P: AsRef<Path>>(document: &TableDocument, path: P) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}
