// Output formatting — terminal display plus small shared helpers.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." when
/// something was cut. Counts characters, not bytes, so multi-byte file names
/// never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_chars("resume.pdf", 40), "resume.pdf");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("résumé", 3), "rés...");
    }
}
