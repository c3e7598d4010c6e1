// Public modules
pub mod compare;
pub mod detect;
pub mod extensions;
pub mod io;
pub mod models;
pub mod normalize;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use compare::{SortKey, SortSpec};
pub use detect::{detect_cell_type, is_comma_number, standard_detectors, TypeDetector};
pub use extensions::SortExtensions;
pub use io::{load_table, save_table};
pub use models::{Column, ColumnType, SortDirection, TableDocument};
pub use normalize::{
    comma_number_key, decode_entities, html_number_key, numeric_key, strip_markup,
    title_number_key,
};
pub use schema_validation::{document_schema, validate_against_schema, validate_document};
pub use sorting::{
    collation_key, column_types, detect_column_type, resolve_column, sort_rows, sort_rows_as,
    sort_table,
};
pub use validation::validate_table;
