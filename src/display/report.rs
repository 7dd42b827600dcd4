//! Formatting helpers for terminal output
//!
//! Shared by the calculator summary and the catalog listings.

/// Format a share (0.0 to 1.0) as a percentage with sensible precision
pub fn format_percentage(share: f64) -> String {
    let pct = share * 100.0;
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Two-segment bar: `first_share` of the width solid, the rest shaded
///
/// Text stand-in for the invested/returns donut chart.
pub fn format_split_bar(first_share: f64, width: usize) -> String {
    let first = ((first_share.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let first = first.min(width);
    format!("{}{}", "█".repeat(first), "░".repeat(width - first))
}

/// Slider track with a marker at `fraction` of the width
pub fn format_track(fraction: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let pos = (fraction.clamp(0.0, 1.0) * (width - 1) as f64).round() as usize;
    (0..width)
        .map(|i| match i.cmp(&pos) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Greedy word wrap to lines of at most `width` characters
///
/// Words longer than the width get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0005), "0.05%");
        assert_eq!(format_percentage(0.055), "5.5%");
        assert_eq!(format_percentage(0.727), "73%");
    }

    #[test]
    fn test_split_bar() {
        let bar = format_split_bar(0.5, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_split_bar(2.0, 4), "████");
    }

    #[test]
    fn test_track() {
        assert_eq!(format_track(0.0, 5), "●────");
        assert_eq!(format_track(1.0, 5), "━━━━●");
        assert_eq!(format_track(0.5, 5), "━━●──");
        assert_eq!(format_track(0.5, 0), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("₹ 4,12,432", 10), "₹ 4,12,432");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("Secure your future with risk-free options", 16);
        assert_eq!(lines, vec!["Secure your", "future with", "risk-free", "options"]);
        assert!(wrap_text("", 10).is_empty());
    }
}
