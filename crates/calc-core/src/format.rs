//! # Number Formatting
//!
//! Two directions of text conversion:
//!
//! - [`format_number`] turns a computed `f64` into the numeral text stored in
//!   the current entry and written into history records.
//! - [`format_for_display`] turns numeral text (possibly half-typed, like
//!   `"1234."`) into what the display shows, with thousands grouping.
//!
//! ## Display Formatting
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  entry text       integer part        fraction        display          │
//! │  ──────────       ────────────        ────────        ───────          │
//! │  "1234567"    ──► 1,234,567                       ──► "1,234,567"      │
//! │  "1234567.89" ──► 1,234,567       +   ".89"       ──► "1,234,567.89"   │
//! │  "1234."      ──► 1,234           +   "."         ──► "1,234."         │
//! │  "0.000"      ──► 0               +   ".000"      ──► "0.000"          │
//! │  "-"          ──► (unparsable)                    ──► ""               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The fraction is never reformatted, so trailing zeros typed by the user
//! stay visible while they type.

/// Decimal separator in entry text.
pub const DECIMAL_SEPARATOR: char = '.';

/// Thousands separator used by the display.
pub const GROUP_SEPARATOR: char = ',';

/// Formats numeral text for the display.
///
/// The integer part is grouped in threes and rounded to zero fraction digits.
/// When the integer part does not parse as a number the integer display is
/// empty. Anything after the first separator is reattached verbatim.
///
/// ## Example
/// ```rust
/// use calc_core::format::format_for_display;
///
/// assert_eq!(format_for_display("1234567"), "1,234,567");
/// assert_eq!(format_for_display("1234567.89"), "1,234,567.89");
/// assert_eq!(format_for_display("Error"), "");
/// ```
pub fn format_for_display(text: &str) -> String {
    let (integer_text, fraction) = match text.split_once(DECIMAL_SEPARATOR) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };

    let integer_display = integer_text
        .parse::<f64>()
        .ok()
        .filter(|_| looks_numeric(integer_text))
        .map(format_grouped_integer)
        .unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{integer_display}{DECIMAL_SEPARATOR}{fraction}"),
        None => integer_display,
    }
}

/// Formats a computed value the way it is stored and logged.
///
/// Shortest round-trip digits; integral values carry no fraction; very large
/// or very small magnitudes switch to exponent form (`1e+21`, `1e-7`);
/// non-finite values become `Infinity`, `-Infinity` or `NaN`.
///
/// ## Example
/// ```rust
/// use calc_core::format::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{value:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }

    value.to_string()
}

/// Parses the longest numeral prefix of `text`.
///
/// Accepts an optional sign, digits with at most one `.`, and an exponent
/// only when it has digits. Whatever follows is ignored, so half-edited
/// exponent entries still parse:
///
/// ```text
/// "1e+21."  ──► 1e21
/// "1e+"     ──► 1
/// "3."      ──► 3
/// "-"       ──► None
/// ```
///
/// ## Example
/// ```rust
/// use calc_core::format::parse_numeral;
///
/// assert_eq!(parse_numeral("1e+21."), Some(1e21));
/// assert_eq!(parse_numeral("12abc"), Some(12.0));
/// assert_eq!(parse_numeral("Error"), None);
/// ```
pub fn parse_numeral(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&(DECIMAL_SEPARATOR as u8)) {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Inserts the group separator every three digits, counting from the right.
///
/// ## Example
/// ```rust
/// use calc_core::format::group_thousands;
///
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("999"), "999");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }

    grouped
}

fn format_grouped_integer(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    let rounded = value.round();
    // f64 Display never uses exponent notation, so this is plain digits.
    let digits = rounded.abs().to_string();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}", group_thousands(&digits))
}

/// `str::parse::<f64>` accepts words like `inf` and `nan`; numerals never
/// contain letters other than an exponent marker.
fn looks_numeric(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | 'e' | 'E'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_for_display("1234567"), "1,234,567");
        assert_eq!(format_for_display("1000"), "1,000");
        assert_eq!(format_for_display("100"), "100");
        assert_eq!(format_for_display("0"), "0");
    }

    #[test]
    fn test_fraction_is_verbatim() {
        assert_eq!(format_for_display("1234567.89"), "1,234,567.89");
        assert_eq!(format_for_display("1234."), "1,234.");
        assert_eq!(format_for_display("0.000"), "0.000");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(format_for_display("-1234"), "-1,234");
        assert_eq!(format_for_display("-0.5"), "-0.5");
    }

    #[test]
    fn test_unparsable_integer_part_is_empty() {
        assert_eq!(format_for_display(""), "");
        assert_eq!(format_for_display("-"), "");
        assert_eq!(format_for_display("Error"), "");
        assert_eq!(format_for_display("inf"), "");
        assert_eq!(format_for_display(".5"), ".5");
    }

    #[test]
    fn test_exponent_entry_is_expanded() {
        assert_eq!(
            format_for_display("1e+21"),
            "1,000,000,000,000,000,000,000"
        );
        assert_eq!(format_for_display("1e-7"), "0");
    }

    #[test]
    fn test_format_number_integral_and_fractional() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_number_zero_sign_is_dropped() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_exponent_thresholds() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_parse_numeral_prefix() {
        assert_eq!(parse_numeral("42"), Some(42.0));
        assert_eq!(parse_numeral("3."), Some(3.0));
        assert_eq!(parse_numeral(".25"), Some(0.25));
        assert_eq!(parse_numeral("-0.5"), Some(-0.5));
        assert_eq!(parse_numeral("1e+21"), Some(1e21));
        assert_eq!(parse_numeral("1e-7"), Some(1e-7));
    }

    #[test]
    fn test_parse_numeral_ignores_trailing_junk() {
        assert_eq!(parse_numeral("1e+21."), Some(1e21));
        assert_eq!(parse_numeral("1e+"), Some(1.0));
        assert_eq!(parse_numeral("1e"), Some(1.0));
        assert_eq!(parse_numeral("2.5e-"), Some(2.5));
    }

    #[test]
    fn test_parse_numeral_needs_a_digit() {
        assert_eq!(parse_numeral(""), None);
        assert_eq!(parse_numeral("-"), None);
        assert_eq!(parse_numeral("."), None);
        assert_eq!(parse_numeral("-."), None);
        assert_eq!(parse_numeral("inf"), None);
        assert_eq!(parse_numeral("Error"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
