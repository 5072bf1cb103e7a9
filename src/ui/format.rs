//! Number formatting for the dashboard cards.
//!
//! Rounding works on the shortest decimal representation of the f64 (what `{}`
//! prints), rounding half away from zero. `1.005` therefore becomes `"1.01"`
//! even though the nearest binary double sits slightly below it.

/// Fixed-point string with `decimals` fraction digits.
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // f64 Display never uses exponent notation
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let int_len = digits.len();
    let frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    for i in 0..decimals {
        digits.push(frac.get(i).copied().unwrap_or(0));
    }

    let round_up = frac.get(decimals).is_some_and(|&d| d >= 5);
    let mut int_len = int_len;
    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, 1);
                int_len += 1;
                break;
            }
            idx -= 1;
            if digits[idx] == 9 {
                digits[idx] = 0;
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let is_zero = digits.iter().all(|&d| d == 0);
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

/// `$189.43`
pub(crate) fn format_usd(value: f64) -> String {
    if value < 0.0 {
        let body = format_fixed(value, 2);
        match body.strip_prefix('-') {
            Some(abs) => format!("-${}", abs),
            None => format!("${}", body),
        }
    } else {
        format!("${}", format_fixed(value, 2))
    }
}

/// Confidence in [0, 1] as a whole percentage, e.g. `0.82` -> `82%`.
pub(crate) fn format_percent(fraction: f64) -> String {
    format!("{}%", format_fixed(fraction * 100.0, 0))
}

pub(crate) fn format_ratio(value: f64) -> String {
    format_fixed(value, 2)
}

pub(crate) fn format_rsi(value: f64) -> String {
    format_fixed(value, 1)
}

pub(crate) fn format_macd(value: f64) -> String {
    format_fixed(value, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero_on_decimal_repr() {
        assert_eq!(format_fixed(0.1234, 3), "0.123");
        assert_eq!(format_fixed(55.55, 1), "55.6");
        assert_eq!(format_fixed(1.005, 2), "1.01");
        assert_eq!(format_fixed(-2.345, 2), "-2.35");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn pads_and_carries() {
        assert_eq!(format_fixed(189.4, 2), "189.40");
        assert_eq!(format_fixed(7.0, 2), "7.00");
        assert_eq!(format_fixed(9.995, 2), "10.00");
        assert_eq!(format_fixed(99.96, 1), "100.0");
        assert_eq!(format_fixed(0.0, 3), "0.000");
    }

    #[test]
    fn negative_zero_result_has_no_sign() {
        assert_eq!(format_fixed(-0.0001, 2), "0.00");
        assert_eq!(format_fixed(-0.0, 1), "0.0");
    }

    #[test]
    fn non_finite_passthrough() {
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn display_helpers() {
        assert_eq!(format_usd(189.43), "$189.43");
        assert_eq!(format_usd(-7.771), "-$7.77");
        assert_eq!(format_percent(0.82), "82%");
        assert_eq!(format_percent(0.875), "88%");
        assert_eq!(format_ratio(1.18), "1.18");
        assert_eq!(format_rsi(58.31), "58.3");
        assert_eq!(format_macd(1.2345), "1.235");
    }
}
