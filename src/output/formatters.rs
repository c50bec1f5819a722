//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};
use colored::Colorize;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern.to_emoji()
}

/// Show each letter of `guess` on its feedback colour
///
/// Excess letters get their own dim shade so they stay distinguishable from
/// plain misses in the terminal.
#[must_use]
pub fn colored_guess(guess: &str, pattern: &Pattern) -> String {
    guess
        .chars()
        .zip(pattern.marks())
        .map(|(c, mark)| {
            let letter = format!(" {} ", c.to_ascii_uppercase());
            match mark {
                Feedback::Green => letter.black().on_green().to_string(),
                Feedback::Amber => letter.black().on_yellow().to_string(),
                Feedback::Red => letter.white().on_bright_black().to_string(),
                Feedback::Excess => letter.bright_black().on_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the best possible value for `targets`
#[must_use]
pub fn entropy_bar(entropy: f64, targets: usize, width: usize) -> String {
    let max_entropy = (targets.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Human-readable byte count
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_to_emoji_all_green() {
        let emoji = pattern_to_emoji(&Pattern::perfect(5));
        assert_eq!(emoji, "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn pattern_to_emoji_excess_shows_as_miss() {
        let pattern: Pattern = "GGAXA".parse().unwrap();
        assert_eq!(pattern_to_emoji(&pattern), "🟩🟩🟨⬜🟨");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let pattern: Pattern = "GGAXA".parse().unwrap();
        assert_eq!(colored_guess("steel", &pattern), " S  T  E  E  L ");
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
    fn entropy_bar_full_when_every_target_is_split() {
        let bar = entropy_bar(2.0, 4, 4);
        assert_eq!(bar, "████");
    }

    #[test]
    fn bytes_are_scaled() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
    }
}
