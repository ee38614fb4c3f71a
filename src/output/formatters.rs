//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one row of a distribution table, never empty for a non-zero count
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let bar = create_progress_bar(count as f64, max_count as f64, width);
    if count > 0 && !bar.starts_with('█') {
        let mut chars: Vec<char> = bar.chars().collect();
        chars[0] = '█';
        return chars.into_iter().collect();
    }
    bar
}
