//! Line-window context for findings

/// The line holding `matched` joined with its neighbours.
///
/// Uses the first line that contains the match, plus the previous and next
/// lines where they exist, joined by single spaces and trimmed. A match that
/// spans a line break sits on no single line and falls back to itself.
pub(crate) fn line_window(lines: &[&str], matched: &str) -> String {
    match lines.iter().position(|line| line.contains(matched)) {
        Some(index) => {
            let start = index.saturating_sub(1);
            let end = (index + 2).min(lines.len());
            lines[start..end].join(" ").trim().to_string()
        }
        None => matched.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    #[test]
    fn test_window_in_middle() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(line_window(&lines(text), "three"), "two three four");
    }

    #[test]
    fn test_window_clamped_at_edges() {
        let text = "first\nsecond";
        assert_eq!(line_window(&lines(text), "first"), "first second");
        assert_eq!(line_window(&lines(text), "second"), "first second");
    }

    #[test]
    fn test_multiline_match_falls_back() {
        let text = "John Smith\nsignature";
        assert_eq!(
            line_window(&lines(text), "John Smith\nsignature"),
            "John Smith\nsignature"
        );
    }

    #[test]
    fn test_first_containing_line_wins() {
        let text = "paid\nx\ny\npaid";
        assert_eq!(line_window(&lines(text), "paid"), "paid x");
    }
}
