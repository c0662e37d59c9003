/// Formats `value` like printf's `%.Ng` with `precision` significant digits.
///
/// Uses plain notation unless the decimal exponent is below -4 or at least
/// `precision`, and strips trailing zeros from the fraction.
pub fn general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let label = if value > 0.0 { "+Inf" } else { "-Inf" };
        return label.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    // Rounding happens here, so the exponent already accounts for carries
    // such as 9.9996 -> 1.000e1.
    let scientific = format!("{value:.prec$e}", prec = precision - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        let mantissa = trim_fraction(mantissa);
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
