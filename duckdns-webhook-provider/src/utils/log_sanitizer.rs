//! Log sanitization utilities
//!
//! DuckDNS authenticates with a `token` query parameter, so every request URL is a
//! credential. These helpers keep tokens and oversized response bodies out of logs
//! and error messages.

/// Maximum number of bytes of a response body kept in logs and errors.
const TRUNCATE_LIMIT: usize = 256;

/// Placeholder written in place of secret query values.
const REDACTED: &str = "***";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Replace the value of every `token=` query parameter with `***`.
///
/// Only the query string is touched; the rest of the URL is returned unchanged.
pub fn redact_token(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("token", _)) => format!("token={REDACTED}"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "OK";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "K".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn token_is_redacted() {
        let url = "https://www.duckdns.org/update?domains=myhost&token=abc123&txt=xyz";
        assert_eq!(
            redact_token(url),
            "https://www.duckdns.org/update?domains=myhost&token=***&txt=xyz"
        );
    }

    #[test]
    fn token_last_parameter_is_redacted() {
        let url = "http://127.0.0.1:8080/update?domains=a&clear=true&token=secret";
        let redacted = redact_token(url);
        assert!(!redacted.contains("secret"));
        assert!(redacted.ends_with("token=***"));
    }

    #[test]
    fn url_without_query_unchanged() {
        let url = "https://www.duckdns.org/update";
        assert_eq!(redact_token(url), url);
    }

    #[test]
    fn similar_parameter_names_untouched() {
        let url = "https://x/update?tokenize=1&token=s";
        assert_eq!(redact_token(url), "https://x/update?tokenize=1&token=***");
    }
}
