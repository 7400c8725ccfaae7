//! Scaling and display of ingredient amounts.

const EIGHTHS: [&str; 8] = ["", "1/8", "1/4", "3/8", "1/2", "5/8", "3/4", "7/8"];

/// Round to the nearest 1/8, halves rounding up.
pub fn round_to_eighth(n: f64) -> f64 {
    (n * 8.0 + 0.5).floor() / 8.0
}

/// Render an amount as a mixed number to the nearest eighth: `"1 1/2"`,
/// `"3/4"`, `"2"`, or `"0"` when it rounds to nothing.
pub fn format_amount(n: f64) -> String {
    let rounded = round_to_eighth(n);
    let whole = (rounded + 1e-9).floor();
    let remainder = ((rounded - whole) * 1000.0).round() / 1000.0;

    let fraction = EIGHTHS
        .iter()
        .enumerate()
        .find(|(i, _)| (*i as f64 / 8.0 - remainder).abs() < 1e-9)
        .map_or("", |(_, s)| *s);

    match (whole > 0.0, fraction.is_empty()) {
        (true, true) => format!("{whole}"),
        (true, false) => format!("{whole} {fraction}"),
        (false, false) => fraction.to_string(),
        (false, true) => "0".to_string(),
    }
}

/// Scale an optional amount; absent stays absent.
pub fn scale(quantity: Option<f64>, factor: f64) -> Option<f64> {
    quantity.map(|q| q * factor)
}

/// Ratio of the servings being cooked to the recipe's base servings.
///
/// A zero base counts as 1 and zero current servings mean "unchanged".
pub fn scale_factor(current_servings: u32, base_servings: u32) -> f64 {
    let base = base_servings.max(1);
    let current = if current_servings == 0 {
        base
    } else {
        current_servings
    };
    f64::from(current) / f64::from(base)
}
