/// Formats an evaluation result for display.
///
/// Values whose decimal exponent lies in `-4..16` are written positionally
/// and always carry at least one fractional digit (`5.0`, never `5`). Outside
/// that range the shortest round-tripping mantissa is followed by a signed,
/// two-digit exponent (`1e+16`, `1.5e-07`). Non-finite values are written as
/// `inf`, `-inf` and `nan`; the evaluator only produces them when an
/// intermediate result overflows.
///
/// # Example
/// ```
/// use reckon::util::format::format_result;
///
/// assert_eq!(format_result(5.0), "5.0");
/// assert_eq!(format_result(-2.0), "-2.0");
/// assert_eq!(format_result(2.5), "2.5");
/// assert_eq!(format_result(-0.0), "-0.0");
/// assert_eq!(format_result(0.0001), "0.0001");
/// assert_eq!(format_result(1e16), "1e+16");
/// assert_eq!(format_result(1.5e-7), "1.5e-07");
/// assert_eq!(format_result(f64::INFINITY), "inf");
/// assert_eq!(format_result(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e')
       && let Ok(exponent) = exponent.parse::<i32>()
       && !(-4..16).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}
