use once_cell::sync::Lazy;
use regex::Regex;

const MIN_EMAIL_LEN: usize = 3;
const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Check that `email` looks like `local@domain.tld`
pub fn is_email_valid(email: &str) -> bool {
    if email.len() < MIN_EMAIL_LEN || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_email_valid("a@b.com"));
        assert!(is_email_valid("first.last+tag@mail.example.co.uk"));
        assert!(is_email_valid("UPPER_case-1%x@Sub-Domain.IO"));
    }

    #[test]
    fn test_rejects_missing_at_or_dot() {
        assert!(!is_email_valid("ab.com"));
        assert!(!is_email_valid("a@bcom"));
        assert!(!is_email_valid("@b.com"));
        assert!(!is_email_valid("a@.c"));
        assert!(!is_email_valid(""));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_email_valid("a b@c.com"));
        assert!(!is_email_valid(" a@b.com"));
        assert!(!is_email_valid("a@b.com\n"));
        assert!(!is_email_valid("a@b .com"));
    }

    #[test]
    fn test_rejects_overlong() {
        let local = "a".repeat(250);
        assert!(!is_email_valid(&format!("{}@b.com", local)));
    }
}
