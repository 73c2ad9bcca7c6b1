/// Salary truncated to whole dollars with thousands separators: `$160,000`.
pub fn format_usd(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Compact axis label: `$0`, `$950`, `$85k`, `$1.2M`.
pub fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.0}k", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

/// Escape text for SVG/XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Round `max` up to a "nice" axis bound (1, 2, 2.5, 5 or 10 times a power of ten).
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    for step in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let bound = step * magnitude;
        if bound >= max {
            return bound;
        }
    }
    10.0 * magnitude
}
