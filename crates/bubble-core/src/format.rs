// File: crates/bubble-core/src/format.rs
// Summary: Number formatting for tick labels and tooltips.

/// Group the integer part with commas: `12345.5` -> `"12,345.5"`, `300.0` -> `"300"`.
/// Fractional values keep their shortest decimal representation.
pub fn thousands(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let raw = format!("{}", v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if v < 0.0 {
        grouped.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d as char);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    grouped
}

/// Fixed decimals; exact ties round away from zero (`40.25` -> `"40.3"`).
pub fn fixed(v: f64, prec: usize) -> String {
    let scale = 10f64.powi(prec.min(15) as i32);
    let scaled = v * scale;
    // {:.N} alone rounds ties to even
    let rounded = if scaled.is_finite() { scaled.round() / scale } else { v };
    format!("{rounded:.prec$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integers() {
        assert_eq!(thousands(300.0), "300");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(200_000.0), "200,000");
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(-45_000.0), "-45,000");
    }

    #[test]
    fn keeps_fraction() {
        assert_eq!(thousands(12_345.5), "12,345.5");
        assert_eq!(thousands(0.25), "0.25");
    }

    #[test]
    fn fixed_one_decimal() {
        assert_eq!(fixed(52.345, 1), "52.3");
        assert_eq!(fixed(70.0, 1), "70.0");
    }

    #[test]
    fn fixed_ties_round_up() {
        assert_eq!(fixed(40.25, 1), "40.3");
        assert_eq!(fixed(0.25, 1), "0.3");
        assert_eq!(fixed(72.75, 1), "72.8");
        assert_eq!(fixed(31.4, 1), "31.4");
        assert_eq!(fixed(-0.25, 1), "-0.3");
    }
}
