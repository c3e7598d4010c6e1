use crate::models::{ColumnType, SortDirection};
use crate::normalize::numeric_key;
use std::cmp::Ordering;

/// Numeric sort key of one cell, with a total order.
///
/// Unparseable cells (NaN keys) compare equal to each other and greater than
/// every number, so they collect at the end of an ascending sort instead of
/// breaking transitivity the way raw float comparison would.
#[derive(Debug, Clone, Copy)]
pub struct SortKey(f64);

impl SortKey {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// True when the cell had no parseable number.
    pub fn is_unparsed(&self) -> bool {
        self.0.is_nan()
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal),
        }
    }
}

/// The sorting contract for one column type: a key extraction run once per
/// row, and the two comparison directions over extracted keys.
///
/// Both directions are generated from the same key function, and descending
/// is ascending with the arguments flipped, so the pair cannot drift apart.
#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    column_type: ColumnType,
}

impl SortSpec {
    pub fn new(column_type: ColumnType) -> Self {
        Self { column_type }
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// Extract the sort key of one raw cell. Called once per row before the
    /// O(n log n) comparisons.
    pub fn pre(&self, raw: &str) -> SortKey {
        SortKey::new(numeric_key(raw, self.column_type))
    }

    /// Compare two extracted keys, ascending.
    pub fn asc(&self, a: &SortKey, b: &SortKey) -> Ordering {
        a.cmp(b)
    }

    /// Compare two extracted keys, descending: ascending with the arguments
    /// flipped.
    pub fn desc(&self, a: &SortKey, b: &SortKey) -> Ordering {
        self.asc(b, a)
    }

    /// Compare two raw cells directly in the given direction. Convenience
    /// path for one-off comparisons; bulk sorting should `pre` once per row.
    pub fn compare_raw(&self, a: &str, b: &str, direction: SortDirection) -> Ordering {
        let (ka, kb) = (self.pre(a), self.pre(b));
        match direction {
            SortDirection::Ascending => self.asc(&ka, &kb),
            SortDirection::Descending => self.desc(&ka, &kb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparing_a_cell_with_itself_is_equal() {
        let spec = SortSpec::new(ColumnType::NumericComma);
        for cell in ["1,5", "-", "abc", "", "10 000,5"] {
            let key = spec.pre(cell);
            assert_eq!(spec.asc(&key, &key), Ordering::Equal);
        }
    }

    #[test]
    fn test_desc_is_asc_with_arguments_flipped() {
        let spec = SortSpec::new(ColumnType::NumericComma);
        let cells = ["1,5", "10,0", "-", "abc", "", "-2,25"];
        for a in cells {
            for b in cells {
                let (ka, kb) = (spec.pre(a), spec.pre(b));
                assert_eq!(spec.desc(&ka, &kb), spec.asc(&kb, &ka));
            }
        }
    }

    #[test]
    fn test_numeric_order_not_lexical() {
        let spec = SortSpec::new(ColumnType::NumericComma);
        assert_eq!(
            spec.compare_raw("2,5", "10,0", SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            spec.compare_raw("2,5", "10,0", SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn test_unparseable_cells_sort_last_ascending() {
        let spec = SortSpec::new(ColumnType::NumericComma);
        assert_eq!(
            spec.compare_raw("abc", "999999,9", SortDirection::Ascending),
            Ordering::Greater
        );
        assert_eq!(
            spec.compare_raw("abc", "xyz", SortDirection::Ascending),
            Ordering::Equal
        );
    }

    #[test]
    fn test_title_keys_compare_by_embedded_integer() {
        let spec = SortSpec::new(ColumnType::TitleNumeric);
        let early = r#"<span title="20260101">Jan 1, 2026</span>"#;
        let late = r#"<span title="20260807">Aug 7, 2026</span>"#;
        assert_eq!(
            spec.compare_raw(early, late, SortDirection::Ascending),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_key_total_order() {
        let number = SortKey::new(3.5);
        let other = SortKey::new(-1.0);
        let missing = SortKey::new(f64::NAN);

        assert!(other < number);
        assert!(number < missing);
        assert!(missing == SortKey::new(f64::NAN));
        assert!(missing.is_unparsed());
        assert!(!number.is_unparsed());
    }
}
