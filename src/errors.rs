use std::path::Path;

/// Map file loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &dyn std::error::Error, path: &Path) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("Schema validation failed") {
        (
            "Schema Error".to_string(),
            "The table document does not match the expected shape.".to_string(),
            error_string,
        )
    } else if error_string.contains("No such file") {
        (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        )
    } else if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        )
    } else if error_string.contains("at line") {
        (
            "Invalid JSON".to_string(),
            "The file is not valid JSON.".to_string(),
            error_string,
        )
    } else {
        (
            "Error Loading File".to_string(),
            "Failed to load table document.".to_string(),
            error_string,
        )
    }
}

/// Map file saving errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_save_error(error: &dyn std::error::Error, path: &Path) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to write to:\n{}", path.display()),
        )
    } else if error_string.contains("No space left") {
        (
            "Disk Full".to_string(),
            "Disk full.".to_string(),
            "There is no space left on the device to save the file.".to_string(),
        )
    } else {
        (
            "Error Saving File".to_string(),
            "Failed to save table document.".to_string(),
            error_string,
        )
    }
}
