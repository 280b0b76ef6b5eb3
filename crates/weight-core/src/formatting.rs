/// Format `value` with exactly `decimals` fraction digits.
///
/// Uses the standard library's exact-decimal formatting, so halfway cases
/// of the binary value round to even (`2.5` → `"2"`, `0.125` → `"0.12"`).
/// With `decimals == 0` no decimal point is emitted.
///
/// # Examples
///
/// ```
/// use weight_core::formatting::format_fixed;
///
/// assert_eq!(format_fixed(68.0388, 2), "68.04");
/// assert_eq!(format_fixed(22.5, 2), "22.50");
/// assert_eq!(format_fixed(19.6, 0), "20");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Format a weight to the two fraction digits used in the report.
pub fn format_weight(value: f64) -> String {
    format_fixed(value, 2)
}
