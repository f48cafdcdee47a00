//! Email and phone lookup

use once_cell::sync::Lazy;
use regex::Regex;

pub const NOT_FOUND: &str = "Not found";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid email regex")
});

static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 555-123-4567, 555.123.4567, 5551234567
        r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",
        // (555) 123-4567
        r"\(\d{3}\)\s*\d{3}[-.]?\d{4}",
        // +91 987 654 3210
        r"\+\d{1,3}[-.\s]?\d{3,4}[-.\s]?\d{3,4}[-.\s]?\d{3,4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid phone regex"))
    .collect()
});

pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First hit of the phone patterns, tried in order.
pub fn extract_phone(text: &str) -> String {
    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert_eq!(extract_email("Contact: jane.doe+jobs@mail.example.org today"), "jane.doe+jobs@mail.example.org");
        assert_eq!(extract_email("no address here"), NOT_FOUND);
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(extract_phone("call 555-123-4567"), "555-123-4567");
        assert_eq!(extract_phone("call (555) 123-4567"), "(555) 123-4567");
        assert_eq!(extract_phone("mobile +91 987 654 3210"), "+91 987 654 3210");
        assert_eq!(extract_phone("no digits"), NOT_FOUND);
    }
}
