use serde_json::{json, Value};

/// JSON Schema for table documents: column definitions with optional sort
/// conventions, and rows of raw cell strings.
pub fn document_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Table document",
        "type": "object",
        "properties": {
            "title": {"type": ["string", "null"]},
            "columns": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "sort_as": {
                            "type": "string",
                            "enum": ["numeric-comma", "numeric-html", "title-numeric", "none"]
                        }
                    },
                    "required": ["name"]
                }
            },
            "rows": {
                "type": "array",
                "items": {
                    "type": "array",
                    "items": {"type": "string"}
                }
            }
        },
        "required": ["columns", "rows"]
    })
}

/// Validate a raw JSON value against the table document schema before
/// attempting to deserialize it
pub fn validate_document(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(&document_schema(), data)
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    // Compile the JSON Schema
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    // Validate the data - returns Result<(), ValidationError>
    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            // Format validation error with path
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document_passes() {
        let data = json!({
            "title": "Expenses",
            "columns": [
                {"name": "Description"},
                {"name": "Amount", "sort_as": "numeric-comma"}
            ],
            "rows": [["Taxi", "12,50"], ["Hotel", "1 240,00"]]
        });

        assert!(validate_document(&data).is_ok());
    }

    #[test]
    fn test_missing_rows_fails() {
        let data = json!({
            "columns": [{"name": "Description"}]
        });

        let result = validate_document(&data);
        assert!(result.is_err());
        let errors = result.unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_non_string_cell_fails() {
        let data = json!({
            "columns": [{"name": "Amount"}],
            "rows": [[12.5]]
        });

        assert!(validate_document(&data).is_err());
    }

    #[test]
    fn test_unknown_sort_convention_fails() {
        let data = json!({
            "columns": [{"name": "Amount", "sort_as": "numeric-dot"}],
            "rows": []
        });

        assert!(validate_document(&data).is_err());
    }

    #[test]
    fn test_error_reports_a_location() {
        let data = json!({
            "columns": "not an array",
            "rows": []
        });

        let errors = validate_document(&data).unwrap_err();
        assert!(errors[0].contains("at /columns"));
    }
}
