//! Display formatting for ticker values.
//!
//! Prices and supplies arrive as numeric strings. They are parsed leniently
//! (longest numeric prefix wins, anything else is NaN) and never coerced to
//! zero, so a malformed value shows up as `NaN` instead of a plausible number.

/// Maximum fraction digits shown for grouped numbers.
const GROUPED_MAX_FRACTION_DIGITS: usize = 3;

/// Separators used when grouping numbers for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Thousands separator (e.g. ',' for en-US)
    pub group_separator: char,
    /// Decimal separator (e.g. '.' for en-US)
    pub decimal_separator: char,
}

impl NumberFormat {
    /// en-US separators: `1,234.5`.
    pub const fn en_us() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    /// Create a format with custom separators.
    pub const fn new(group_separator: char, decimal_separator: char) -> Self {
        Self {
            group_separator,
            decimal_separator,
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Parse a numeric string the lenient way.
///
/// Leading whitespace is skipped and the longest prefix that forms a number
/// (optional sign, digits, optional fraction, optional exponent, or
/// `Infinity`) is parsed. Input with no numeric prefix yields NaN.
///
/// ```
/// use coinpage::format::parse_float;
///
/// assert_eq!(parse_float("1234.5"), 1234.5);
/// assert_eq!(parse_float("  42abc"), 42.0);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - (end + 1);
        if frac_digits > 0 {
            digit_count += frac_digits;
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Fraction digits inspected to tell an exact tie from a near tie.
///
/// Any double other than a tie itself differs from the tie by far more than
/// `1e-30`, so the digits past the rounding position are exact enough.
const TIE_CHECK_DIGITS: usize = 30;

/// Values at or above this magnitude print in exponent form with two-digit
/// fixed formatting.
const FIXED_EXPONENT_THRESHOLD: f64 = 1e21;

/// Round a non-negative finite value to `digits` fraction digits, with
/// exact ties going away from zero.
///
/// ```
/// use coinpage::format::round_half_away;
///
/// assert_eq!(round_half_away(1.125, 2), "1.13");
/// assert_eq!(round_half_away(1.124, 2), "1.12");
/// assert_eq!(round_half_away(9.995, 2), "9.99");
/// ```
pub fn round_half_away(value: f64, digits: usize) -> String {
    let exact = format!("{:.*}", digits + TIE_CHECK_DIGITS, value);
    let (integer, fraction) = match exact.split_once('.') {
        Some(parts) => parts,
        None => return format!("{:.*}", digits, value),
    };
    let (kept, rest) = fraction.split_at(digits);

    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    // Add one unit in the last kept place, carrying leftwards
    let mut all: Vec<u8> = integer.bytes().chain(kept.bytes()).collect();
    let mut carry = true;
    for digit in all.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        all.insert(0, b'1');
    }

    let split = all.len() - digits;
    let mut out: String = all[..split].iter().map(|&b| b as char).collect();
    if digits > 0 {
        out.push('.');
        out.extend(all[split..].iter().map(|&b| b as char));
    }
    out
}

/// Exponent notation with an explicit exponent sign: `1e+21`, `1.5e-7`.
fn exponential(value: f64) -> String {
    let plain = format!("{:e}", value);
    match plain.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => plain,
    }
}

/// Format a value with exactly two fraction digits.
///
/// Exact ties round away from zero and magnitudes of `1e21` or more switch
/// to exponent form. NaN renders as `NaN` and infinities as `Infinity` /
/// `-Infinity`.
pub fn format_fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= FIXED_EXPONENT_THRESHOLD {
        return exponential(value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, round_half_away(value.abs(), 2))
}

/// Format a value with group separators and up to three fraction digits.
///
/// Trailing fraction zeros are dropped, so whole numbers print without a
/// decimal part: `21000000.0` becomes `21,000,000`. Exact ties round away
/// from zero.
pub fn format_grouped(value: f64, fmt: NumberFormat) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = round_half_away(value.abs(), GROUPED_MAX_FRACTION_DIGITS);
    let (integer_part, fraction_part) = match rounded.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 2);
    if value < 0.0 && (integer_part != "0" || !fraction_part.is_empty()) {
        out.push('-');
    }

    let digits = integer_part.len();
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(fmt.group_separator);
        }
        out.push(ch);
    }

    if !fraction_part.is_empty() {
        out.push(fmt.decimal_separator);
        out.push_str(fraction_part);
    }

    out
}

/// Display a raw USD price: `"1234.5"` becomes `"$1234.50"`.
pub fn format_price(raw: &str) -> String {
    format!("${}", format_fixed2(parse_float(raw)))
}

/// Display a raw supply followed by the record's symbol:
/// `"21000000"` with `BTC` becomes `"21,000,000 BTC"`.
pub fn format_supply(raw: &str, symbol: &str, fmt: NumberFormat) -> String {
    format!("{} {}", format_grouped(parse_float(raw), fmt), symbol)
}
