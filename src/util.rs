/// Truncates a display label to `max_chars` characters, appending an
/// ellipsis when anything was cut. Counts chars, not bytes, so multi-byte
/// names survive.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated = text
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    truncated.push('…');
    truncated
}

/// Formats a signed growth percentage with an explicit `+` for gains.
pub fn format_growth_rate(rate: f32) -> String {
    if rate > 0.0 {
        format!("+{rate}%")
    } else {
        format!("{rate}%")
    }
}
