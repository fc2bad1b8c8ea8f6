use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Significant digits used when a float is printed.
pub const FLOAT_SIGNIFICANT_DIGITS: usize = 5;

/// Formats a float like C's `%.{precision}g`.
///
/// The value is rounded to `precision` significant digits. Scientific notation
/// (`d.ddde±XX`) is used when the decimal exponent is below `-4` or not below
/// `precision`; otherwise fixed notation is used. Trailing zeros, and a
/// trailing decimal point, are removed in both forms.
///
/// ## Parameters
/// - `value`: The float to format.
/// - `precision`: Number of significant digits; `0` is treated as `1`.
///
/// ## Example
/// ```
/// use snakelet::util::num::format_general;
///
/// assert_eq!(format_general(3.5, 5), "3.5");
/// assert_eq!(format_general(2.0 / 3.0, 5), "0.66667");
/// assert_eq!(format_general(123_456.0, 5), "1.2346e+05");
/// assert_eq!(format_general(0.000_01, 5), "1e-05");
/// assert_eq!(format_general(-0.0, 5), "-0");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{value:.prec$e}", prec = precision - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}",
                strip_trailing_zeros(mantissa),
                exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Converts a signed index into a position inside a list of length `len`.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` if the index is negative or not
/// below `len`.
///
/// ## Example
/// ```
/// use snakelet::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 3).unwrap(), 2);
/// assert!(checked_index(3, 3).is_err());
/// assert!(checked_index(-1, 3).is_err());
/// ```
pub fn checked_index(index: i64, len: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|&position| position < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { index, len })
}
