use crate::models::ColumnType;
use regex::Regex;
use std::sync::LazyLock;

/// Non-breaking space, the usual thousands filler in comma-decimal locales
const NBSP: char = '\u{a0}';

/// First number embedded in a title attribute; the quote is optional in the
/// markup this has to cope with
pub(crate) static TITLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"title="*(-?[0-9.]+)"#).unwrap());

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Turn a raw cell into its numeric sort key under the given convention.
///
/// Never panics: a cell that does not yield a number maps to `NaN`, and the
/// comparison layer gives `NaN` keys a fixed place in the order. `Fallback`
/// columns have no numeric key.
pub fn numeric_key(raw: &str, column_type: ColumnType) -> f64 {
    match column_type {
        ColumnType::NumericComma => comma_number_key(raw),
        ColumnType::NumericHtml => html_number_key(raw),
        ColumnType::TitleNumeric => title_number_key(raw),
        ColumnType::Fallback => f64::NAN,
    }
}

/// Numeric key of a comma-decimal cell.
///
/// A cell that is just "-" or "—" is an empty placeholder and keys to zero.
/// Otherwise literal "&nbsp;" markers, whitespace and non-breaking spaces
/// are stripped, the first comma becomes the decimal point, and the leading
/// number of what remains is the key.
pub fn comma_number_key(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed == "-" || trimmed == "—" {
        return 0.0;
    }

    let mut cleaned = String::with_capacity(raw.len());
    let mut comma_replaced = false;
    for ch in raw.replace("&nbsp;", "").chars() {
        if ch.is_whitespace() || ch == NBSP {
            continue;
        }
        if ch == ',' && !comma_replaced {
            cleaned.push('.');
            comma_replaced = true;
        } else {
            cleaned.push(ch);
        }
    }

    leading_float(&cleaned)
}

/// Numeric key of a markup-wrapped cell: unwrap to text content, then treat
/// the text as a comma-decimal cell.
pub fn html_number_key(raw: &str) -> f64 {
    comma_number_key(&strip_markup(raw))
}

/// Numeric key of a title-attribute cell: the first embedded number, read as
/// an integer. Truncation of any fractional part is intentional; these
/// attributes carry integer codes (Ymd dates, ranks).
pub fn title_number_key(raw: &str) -> f64 {
    match TITLE_NUMBER.captures(raw) {
        Some(captures) => leading_int(&captures[1]),
        None => f64::NAN,
    }
}

/// Extract the text content of a markup fragment.
///
/// Entities are decoded before tags are dropped so escaped markup
/// ("&lt;b&gt;7&lt;/b&gt;") unwraps the same way live markup does.
pub fn strip_markup(raw: &str) -> String {
    let decoded = decode_entities(raw);
    MARKUP_TAG.replace_all(&decoded, "").into_owned()
}

/// Decode the handful of HTML entities that show up in rendered cells.
pub fn decode_entities(raw: &str) -> String {
    raw.replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Parse the longest leading decimal number, like a lenient float parse:
/// "1.2.3" reads as 1.2 and trailing junk is ignored. `NaN` when the string
/// does not start with a number.
pub(crate) fn leading_float(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        // "5." and ".5" are numbers; "." alone is not
        if has_digits || frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }

    if !has_digits {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parse the longest leading integer: "4.5" reads as 4, "042" as 42.
/// `NaN` when the string does not start with an integer.
pub(crate) fn leading_int(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }

    let digit_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digit_start {
        return f64::NAN;
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal_parses() {
        assert_eq!(comma_number_key("1,5"), 1.5);
        assert_eq!(comma_number_key("-1,5"), -1.5);
        assert_eq!(comma_number_key("10,0"), 10.0);
        assert_eq!(comma_number_key("3"), 3.0);
    }

    #[test]
    fn test_placeholder_cells_key_to_zero() {
        assert_eq!(comma_number_key("-"), 0.0);
        assert_eq!(comma_number_key("—"), 0.0);
        assert_eq!(comma_number_key("  — "), 0.0);
    }

    #[test]
    fn test_thousands_fillers_are_stripped() {
        assert_eq!(comma_number_key("1 234,56"), 1234.56);
        assert_eq!(comma_number_key("1\u{a0}234,56"), 1234.56);
        assert_eq!(comma_number_key("1&nbsp;234&nbsp;567,8"), 1234567.8);
        assert_eq!(comma_number_key("1 234 567"), 1234567.0);
    }

    #[test]
    fn test_only_first_comma_becomes_decimal_point() {
        // a second comma ends the number, like a lenient float parse would
        assert_eq!(comma_number_key("1,2,3"), 1.2);
    }

    #[test]
    fn test_unparseable_cells_key_to_nan() {
        assert!(comma_number_key("").is_nan());
        assert!(comma_number_key(",").is_nan());
        assert!(comma_number_key(".").is_nan());
        assert!(comma_number_key("abc").is_nan());
    }

    #[test]
    fn test_markup_wrapped_numbers_unwrap() {
        assert_eq!(html_number_key("<b>2,5</b>"), 2.5);
        assert_eq!(html_number_key("<span class=\"amount\">1 200,00</span>"), 1200.0);
        assert_eq!(html_number_key("<i>—</i>"), 0.0);
    }

    #[test]
    fn test_escaped_markup_unwraps_too() {
        assert_eq!(html_number_key("&lt;b&gt;7&lt;/b&gt;"), 7.0);
    }

    #[test]
    fn test_title_attribute_reads_as_integer() {
        assert_eq!(title_number_key(r#"<span title="20260807">Aug 7, 2026</span>"#), 20260807.0);
        assert_eq!(title_number_key(r#"<span title="-3">minus three</span>"#), -3.0);
        // integral truncation is intentional for title values
        assert_eq!(title_number_key(r#"<span title="4.5">x</span>"#), 4.0);
        assert!(title_number_key("<span>no title</span>").is_nan());
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let cells = ["1,5", "-", "<b>2,5</b>", "abc", ""];
        for cell in cells {
            let first = comma_number_key(cell);
            let second = comma_number_key(cell);
            assert_eq!(first.is_nan(), second.is_nan());
            if !first.is_nan() {
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_fallback_has_no_numeric_key() {
        assert!(numeric_key("1,5", ColumnType::Fallback).is_nan());
    }

    #[test]
    fn test_leading_float_edges() {
        assert_eq!(leading_float(".5"), 0.5);
        assert_eq!(leading_float("5."), 5.0);
        assert_eq!(leading_float("-.5"), -0.5);
        assert_eq!(leading_float("12—"), 12.0);
        assert!(leading_float("-").is_nan());
        assert!(leading_float(".").is_nan());
    }
}
