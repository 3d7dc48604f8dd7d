/// Truncate a string to at most `max_bytes` bytes at a character boundary.
///
/// Used to keep prompts and response bodies short in log lines.
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}

/// Strip a surrounding markdown code fence (```` ``` ```` or ```` ```json ````) from a response.
pub fn strip_code_blocks(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "text", ...) on the opening fence line.
    let body = match rest.find('\n') {
        Some(newline) if !rest[..newline].contains(char::is_whitespace) => &rest[newline + 1..],
        _ => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_char_boundary() {
        let text = "site:例え.jp";
        let truncated = truncate_to_char_boundary(text, 7);
        assert!(truncated.len() <= 7);
        assert!(text.starts_with(truncated));
        assert_eq!(truncated, "site:");
    }

    #[test]
    fn test_truncate_within_bounds() {
        assert_eq!(truncate_to_char_boundary("inurl:admin", 100), "inurl:admin");
    }

    #[test]
    fn test_strip_code_blocks() {
        assert_eq!(strip_code_blocks("```json\n[\"a\"]\n```"), "[\"a\"]");
        assert_eq!(strip_code_blocks("```\n[]\n```"), "[]");
        assert_eq!(strip_code_blocks("  []  "), "[]");
    }

    #[test]
    fn test_strip_code_blocks_single_line_fence() {
        assert_eq!(
            strip_code_blocks("```site:gov filetype:pdf```"),
            "site:gov filetype:pdf"
        );
    }
}
