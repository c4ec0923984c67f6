//! Numeric coercions shared by `Time` and `Score`.

/// Largest integer an IEEE double represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Converts a number to hundredths.
///
/// Whole numbers are taken as already expressed in hundredths. Numbers with a
/// fractional part are whole units and get scaled by 100, rounding to nearest.
pub(crate) fn hundredths_from_f64(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let scaled = if value.fract() == 0.0 {
        value
    } else {
        (value * 100.0).round()
    };
    if scaled.abs() > MAX_EXACT_INTEGER {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "finite and within the exact integer range"
    )]
    let hundredths = scaled as i64;
    Some(hundredths)
}

/// Interprets a 1-2 digit fractional group as hundredths ("6" is 60).
pub(crate) fn fraction_hundredths(digits: &str) -> Option<u8> {
    let value: u8 = digits.parse().ok()?;
    match digits.len() {
        1 => Some(value * 10),
        2 => Some(value),
        _ => None,
    }
}

/// True when the leading integer of `s` is zero ("0", "00:00.0", "-0a").
///
/// Leading whitespace and a sign are skipped; text after the digits is ignored.
/// A `0x` prefix starts a hexadecimal integer, so "0x1A" is not zero.
pub(crate) fn leading_integer_is_zero(s: &str) -> bool {
    let s = s.trim_start();
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let digits = hex.bytes().take_while(u8::is_ascii_hexdigit).count();
        return digits > 0 && hex.as_bytes()[..digits].iter().all(|&b| b == b'0');
    }
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && s.as_bytes()[..digits].iter().all(|&b| b == b'0')
}
