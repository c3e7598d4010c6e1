use crate::compare::SortSpec;
use crate::detect::{detect_cell_type, standard_detectors, TypeDetector};
use crate::models::ColumnType;
use std::collections::HashMap;

/// The sorting extensions a host table widget consults: an ordered list of
/// type detectors and the per-type sorting contracts.
///
/// Built once at application startup and passed by reference to the host;
/// read-only afterwards, so concurrent sorts of independent columns need no
/// synchronization.
pub struct SortExtensions {
    detectors: Vec<TypeDetector>,
    specs: HashMap<ColumnType, SortSpec>,
}

impl SortExtensions {
    /// Build the standard extension set: the three custom conventions, with
    /// detectors in declared precedence order (most specific first).
    pub fn new() -> Self {
        let detectors = standard_detectors();
        let specs = detectors
            .iter()
            .map(|detector| (detector.tag(), SortSpec::new(detector.tag())))
            .collect();

        Self { detectors, specs }
    }

    /// The detectors in the order the host must consult them.
    pub fn detectors(&self) -> &[TypeDetector] {
        &self.detectors
    }

    /// Classify one sample cell. `None` means no detector recognized it and
    /// the host's built-in detection applies.
    pub fn detect(&self, cell: &str) -> Option<ColumnType> {
        detect_cell_type(&self.detectors, cell)
    }

    /// The sorting contract for a column type. `Fallback` has none: its
    /// ordering belongs to the host.
    pub fn sort_spec(&self, column_type: ColumnType) -> Option<&SortSpec> {
        self.specs.get(&column_type)
    }

    /// The column types with a registered sorting contract.
    pub fn registered_types(&self) -> Vec<ColumnType> {
        self.detectors.iter().map(|d| d.tag()).collect()
    }
}

impl Default for SortExtensions {
    fn default() -> Self {
        Self::new()
    }
}
