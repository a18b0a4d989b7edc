/// Compact form for HUD counters: `1.23M`, `4.50k`, or the floored integer.
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("{:.2}M", value / 1_000_000.0);
    }
    if value >= 1_000.0 {
        return format!("{:.2}k", value / 1_000.0);
    }
    format!("{}", value.floor() as i64)
}

/// Floored and grouped with commas: `1234567.8` → `1,234,567`.
pub fn format_currency(value: f64) -> String {
    let floored = value.floor() as i64;
    let digits = floored.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if floored < 0 {
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
