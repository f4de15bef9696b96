pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `v` inside `[a, b]`, clamped to `[0, 1]`. Degenerate spans snap to 0 or 1.
pub(crate) fn inverse_lerp_clamped(a: f64, b: f64, v: f64) -> f64 {
    if b <= a {
        return if v <= a { 0.0 } else { 1.0 };
    }
    ((v - a) / (b - a)).clamp(0.0, 1.0)
}

/// `parseFloat`-style number parse: longest leading numeric prefix, NaN otherwise.
pub(crate) fn parse_leading_f64(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return sign * f64::INFINITY;
    }

    let mut valid_end = 0usize;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
                valid_end = end;
            }
            b'.' if !seen_dot && !seen_exp => {
                seen_dot = true;
                end += 1;
                if seen_digit {
                    valid_end = end;
                }
            }
            b'e' | b'E' if seen_digit && !seen_exp => {
                seen_exp = true;
                end += 1;
                if matches!(bytes.get(end), Some(b'+' | b'-')) {
                    end += 1;
                }
            }
            _ => break,
        }
    }

    if !seen_digit {
        return f64::NAN;
    }
    s[..valid_end]
        .trim_end_matches('.')
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

/// `Number()`-style parse: the whole trimmed string must be numeric, empty counts as 0.
pub(crate) fn parse_whole_f64(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // Keeps `inf`, `nan` and friends away from the float parser.
    let numeric = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeric {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
