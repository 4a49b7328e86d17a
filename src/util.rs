//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal column width of `s`
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate `s` to at most `max_cols` terminal columns, appending `…` when cut
///
/// Wide characters (CJK, emoji) count as two columns and are never split.
pub fn truncate_display(s: &str, max_cols: usize) -> String {
    if display_width(s) <= max_cols {
        return s.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    let budget = max_cols - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Mask a secret for display, one bullet per character
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_display("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_display("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each character is two columns wide
        let s = "日本語";
        assert_eq!(display_width(s), 6);
        assert_eq!(truncate_display(s, 5), "日本…");
        assert_eq!(truncate_display(s, 4), "日…");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_display("hello", 0), "");
    }

    #[test]
    fn test_mask_counts_chars() {
        assert_eq!(mask("pässword"), "••••••••");
        assert_eq!(mask(""), "");
    }
}
