use crate::core::Sequence;

/// Fixed four-decimal form. NaN is spelled `nan`, infinities `inf`/`-inf`.
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.4}", value)
    }
}

/// Renders a single term: whole values as plain integers, everything else
/// with four decimal places.
pub fn format_element(value: f64) -> String {
    if value.fract() == 0.0 {
        // `+ 0.0` folds -0.0 into 0.0 so it prints as "0"
        format!("{:.0}", value + 0.0)
    } else {
        format_fixed(value)
    }
}

/// Joins the rendered terms with `", "`. An empty slice renders as `""`.
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|&value| format_element(value))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_sequence(sequence: &Sequence) -> String {
    format_values(sequence.values())
}

/// Shortest round-trip form used to echo back what the user asked for.
///
/// Whole values keep a trailing `.0` (`25.0`). Magnitudes below `1e-4` or
/// from `1e16` up switch to exponent form with a signed, two-digit exponent
/// (`1e+16`, `1.5e-05`).
pub fn format_requested(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }

    format!("{:?}", value)
}

fn format_exponent(value: f64) -> String {
    let shortest = format!("{:e}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}
