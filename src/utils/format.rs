use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a percentage with one decimal, e.g. "60.0%"
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

/// Create a simple progress bar for a percentage in `[0, 100]`
pub fn rate_bar(rate: f64, width: usize) -> String {
    let ratio = (rate / 100.0).clamp(0.0, 1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Cut `s` to at most `max_cols` terminal columns, marking the cut with "…".
/// Wide (CJK) characters count as two columns.
pub fn fit_width(s: &str, max_cols: usize) -> String {
    if s.width() <= max_cols {
        return s.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_cols - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `s` with spaces to exactly `cols` display columns, cutting it if longer.
pub fn pad_width(s: &str, cols: usize) -> String {
    let fitted = fit_width(s, cols);
    let pad = cols.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(pad))
}
