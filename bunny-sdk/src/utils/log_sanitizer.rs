//! Log sanitization utilities
//!
//! Response bodies (video listings, container templates, WAF rule sets)
//! can be very large, so only a bounded prefix ends up in debug/error logs.
//! Request headers are never logged, which keeps the access key out of logs.

/// Longest body prefix, in bytes, that is written to logs.
const TRUNCATE_LIMIT: usize = 256;

/// Byte length of the longest prefix of `s` that fits in `limit` bytes
/// without splitting a character.
fn prefix_len(s: &str, limit: usize) -> usize {
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= limit)
        .last()
        .unwrap_or(0)
}

/// Shorten a body for logging.
///
/// Anything longer than `TRUNCATE_LIMIT` bytes is cut on a char boundary and
/// tagged with its full byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_owned();
    }
    let kept = &s[..prefix_len(s, TRUNCATE_LIMIT)];
    format!("{kept}... [truncated, total {} bytes]", s.len())
}

/// Lossy UTF-8 view of a response body, truncated for logging.
pub fn truncate_bytes_for_log(bytes: &[u8]) -> String {
    truncate_for_log(&String::from_utf8_lossy(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"Id":1}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "b".repeat(TRUNCATE_LIMIT + 40);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"b".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 40)));
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(TRUNCATE_LIMIT);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn prefix_never_splits_a_char() {
        // "é" is two bytes, so a three byte budget keeps one of them.
        assert_eq!(prefix_len("éé", 3), 2);
        assert_eq!(prefix_len("abc", 0), 0);
    }

    #[test]
    fn invalid_utf8_bytes_are_lossy() {
        let result = truncate_bytes_for_log(&[0x66, 0x6f, 0xff, 0x6f]);
        assert_eq!(result, "fo\u{fffd}o");
    }
}
