use crate::models::ColumnType;
use crate::normalize::{leading_float, strip_markup, TITLE_NUMBER};

/// Character-class test for comma-decimal numbers: after an optional leading
/// minus, every character must be a digit, comma, dot, em-dash, space or
/// non-breaking space. Literal "&nbsp;" markers are ignored. An empty
/// residue passes, so "", "." and "," all count as numeric; see the pinned
/// tests below.
pub fn is_comma_number(raw: &str) -> bool {
    let cleaned = raw.replace("&nbsp;", "");
    let rest = cleaned.strip_prefix('-').unwrap_or(&cleaned);

    rest.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '—' | ' ' | '\u{a0}'))
}

/// Title-attribute probe: the cell must carry a title="<number>" attribute
/// whose captured value is integral. Fractional title values are not the
/// integer codes this convention encodes, so they fall through.
pub fn probe_title_numeric(cell: &str) -> Option<ColumnType> {
    let captures = TITLE_NUMBER.captures(cell)?;
    let value = leading_float(&captures[1]);
    if value % 1.0 == 0.0 {
        Some(ColumnType::TitleNumeric)
    } else {
        None
    }
}

/// Markup-wrapped-number probe. A cell that opens with a digit is a plain
/// number, not a markup fragment, and is left to the comma probe.
pub fn probe_numeric_html(cell: &str) -> Option<ColumnType> {
    let first = cell.chars().next()?;
    if first.is_ascii_digit() {
        return None;
    }

    let text = strip_markup(cell);
    if text.is_empty() {
        return None;
    }

    if is_comma_number(&text) {
        Some(ColumnType::NumericHtml)
    } else {
        None
    }
}

/// Comma-decimal probe: the bare character-class test.
pub fn probe_numeric_comma(cell: &str) -> Option<ColumnType> {
    if is_comma_number(cell) {
        Some(ColumnType::NumericComma)
    } else {
        None
    }
}

/// A type-detection probe together with the column type it reports.
pub struct TypeDetector {
    tag: ColumnType,
    probe: fn(&str) -> Option<ColumnType>,
}

impl TypeDetector {
    pub fn new(tag: ColumnType, probe: fn(&str) -> Option<ColumnType>) -> Self {
        Self { tag, probe }
    }

    /// The column type this detector reports on a match.
    pub fn tag(&self) -> ColumnType {
        self.tag
    }

    /// Run the probe against one cell.
    pub fn run(&self, cell: &str) -> Option<ColumnType> {
        (self.probe)(cell)
    }
}

/// The built-in detectors in precedence order. Attribute-embedded and
/// markup-wrapped encodings are stricter patterns than the bare character
/// class, so they are consulted first; a plain "1,5" would satisfy the
/// character class and shadow them otherwise.
pub fn standard_detectors() -> Vec<TypeDetector> {
    vec![
        TypeDetector::new(ColumnType::TitleNumeric, probe_title_numeric),
        TypeDetector::new(ColumnType::NumericHtml, probe_numeric_html),
        TypeDetector::new(ColumnType::NumericComma, probe_numeric_comma),
    ]
}

/// Classify one cell: the first detector to answer wins. `None` means no
/// probe recognized the cell and the host default applies.
pub fn detect_cell_type(detectors: &[TypeDetector], cell: &str) -> Option<ColumnType> {
    detectors.iter().find_map(|detector| detector.run(cell))
}
