//! Formatting utilities for terminal output

/// Badge showing a word's length, e.g. `④`
///
/// Circled digits cover 1 to 20; longer words fall back to `(21)`.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({n})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for words found out of words available
#[must_use]
pub fn found_bar(found: usize, remaining: usize, width: usize) -> String {
    create_progress_bar(found as f64, (found + remaining) as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_circled() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(4), "④");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn length_badge_fallback() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn found_bar_counts() {
        assert_eq!(found_bar(1, 3, 8), "██░░░░░░");
        assert_eq!(found_bar(0, 0, 3), "░░░");
    }
}
