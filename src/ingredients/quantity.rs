//! Numeric amounts written as integers, decimals, fractions or mixed
//! numbers ("2", "0.5", "3/4", "1 1/2").

/// Parse a quantity expression into a number.
///
/// Returns `None` for empty or unparseable input and for results that are
/// not finite (a zero denominator, for instance).
pub fn parse_quantity(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let value = if text.contains('/') {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() == 2 {
            let whole = leading_float(parts[0]).unwrap_or(0.0);
            whole + fraction(parts[1])?
        } else {
            fraction(text)?
        }
    } else {
        leading_float(text)?
    };

    value.is_finite().then_some(value)
}

fn fraction(text: &str) -> Option<f64> {
    let mut parts = text.split('/');
    let numerator = leading_float(parts.next()?)?;
    let denominator = leading_float(parts.next()?)?;
    Some(numerator / denominator)
}

/// Reads the longest numeric prefix, ignoring whatever follows it
/// ("2 cups" reads as 2).
fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}
