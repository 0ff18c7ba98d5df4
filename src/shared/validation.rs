use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose phone number check: optional leading +, then digits, spaces or hyphens
    /// - Valid: "+233123456789", "024 123 4567", "024-123-4567"
    /// - Invalid: "phone", "+", "12ab34"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 \-]{5,}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+233123456789"));
        assert!(PHONE_REGEX.is_match("024 123 4567"));
        assert!(PHONE_REGEX.is_match("024-123-4567"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("+")); // no digits
        assert!(!PHONE_REGEX.is_match("12ab34"));
        assert!(!PHONE_REGEX.is_match("")); // empty
    }
}
