/// Placeholder shown wherever a value does not apply (missing variant, zero divisor)
pub const NOT_APPLICABLE: &str = "--";

/// Format a byte count as a human-readable decimal string (B, kB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1000;
    const MB: u64 = 1000 * 1000;
    const GB: u64 = 1000 * 1000 * 1000;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} kB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format an optional byte count, using the placeholder when absent
pub fn format_opt_size(bytes: Option<u64>) -> String {
    bytes.map(format_size).unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Format a ratio as a whole percentage ("80%"), or the placeholder when absent
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r.is_finite() => format!("{}%", (r * 100.0).round() as i64),
        _ => NOT_APPLICABLE.to_string(),
    }
}

/// Divide two byte counts, yielding `None` when the result would not be finite
pub fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    let r = numerator as f64 / denominator as f64;
    r.is_finite().then_some(r)
}
