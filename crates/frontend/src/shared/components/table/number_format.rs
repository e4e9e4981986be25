//! Number formatting for tables and inputs
//!
//! Currency text follows what `Intl.NumberFormat('id-ID', { style: 'currency',
//! currency: 'IDR', minimumFractionDigits: 0 })` produces in the browser:
//! `Rp`, a no-break space, then the amount grouped by `.` in threes.

/// Currency symbol for Indonesian rupiah
pub const RUPIAH_SYMBOL: &str = "Rp";

/// Separator between the symbol and the amount (U+00A0)
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Groups the digits of `value` by three, right to left, using `separator`.
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::group_thousands;
/// assert_eq!(group_thousands(1234567, '.'), "1.234.567");
/// assert_eq!(group_thousands(-1500, ' '), "-1 500");
/// ```
pub fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Formats an amount in rupiah with no fractional digits.
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_rupiah;
/// assert_eq!(format_rupiah(15000), "Rp\u{a0}15.000");
/// ```
pub fn format_rupiah(amount: i64) -> String {
    let grouped = group_thousands(amount, '.');
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-{}{}{}", RUPIAH_SYMBOL, SYMBOL_SEPARATOR, magnitude),
        None => format!("{}{}{}", RUPIAH_SYMBOL, SYMBOL_SEPARATOR, grouped),
    }
}

/// Formats a discount as shown in the product table, e.g. `12.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Keeps only ASCII digits from user text.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parses the digits contained in `text`.
///
/// Text without digits (an empty field, only symbols) is `Some(0)`.
/// `None` means the digits do not fit into `i64`.
pub fn parse_digits(text: &str) -> Option<i64> {
    let digits = digits_only(text);
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<i64>().ok()
}
