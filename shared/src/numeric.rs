/// Reads numeric form text the way a browser number coercion does.
///
/// Surrounding whitespace is ignored. Unsigned `0x`/`0o`/`0b` integer
/// literals are accepted, as is `Infinity` with an optional sign. Decimal
/// text may carry a sign, a fraction and an exponent. Empty or malformed
/// text is `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" && trimmed.len() - unsigned.len() <= 1 {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Rejects the `inf`/`nan` spellings f64::from_str accepts
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// `None` when `text` has no radix prefix, `Some(None)` when it has one but
/// the digits are malformed.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    }))
}
