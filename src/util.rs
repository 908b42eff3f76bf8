/// UTF-8 safe truncation by character count, appending an ellipsis when
/// anything was cut. Card titles and descriptions can be arbitrarily long;
/// byte slicing would panic mid-codepoint.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn long_string_gets_ellipsis() {
        assert_eq!(truncate_str("hello world", 6), "hello…");
        assert_eq!(truncate_str("hello world", 6).chars().count(), 6);
    }

    #[test]
    fn multibyte_no_panic() {
        let s = "毎日の習慣を記録する";
        let result = truncate_str(s, 5);
        assert_eq!(result.chars().count(), 5);
        assert!(result.ends_with('…'));
    }

    #[test]
    fn zero_budget_yields_bare_ellipsis() {
        assert_eq!(truncate_str("hello", 0), "…");
    }
}
