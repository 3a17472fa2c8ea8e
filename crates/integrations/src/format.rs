//! Human-readable number formatting for exports and notifications.

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `-1234` → `"-$1,234"`.
pub fn currency(value: i64) -> String {
    let grouped = group_thousands(value);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-${}", magnitude),
        None => format!("${}", grouped),
    }
}

/// Input quantities are whole in practice; fractional parts are rounded.
pub fn quantity(value: f64) -> String {
    group_thousands(value.round() as i64)
}
