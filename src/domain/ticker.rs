use std::fmt;

/// A normalized stock symbol: trimmed and upper-cased, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize free-text input. Yields `None` unless the input holds at
    /// least one letter or digit, so `""`, `"  "` and `".."` are rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        assert_eq!(Ticker::parse(" aapl ").unwrap().as_str(), "AAPL");
        assert_eq!(Ticker::parse("\tmsft\n").unwrap().as_str(), "MSFT");
        assert_eq!(Ticker::parse("brk.b").unwrap().as_str(), "BRK.B");
    }

    #[test]
    fn already_normalized_input_is_unchanged() {
        assert_eq!(Ticker::parse("GOOGL").unwrap().to_string(), "GOOGL");
    }

    #[test]
    fn empty_and_whitespace_input_is_rejected() {
        assert!(Ticker::parse("").is_none());
        assert!(Ticker::parse("   ").is_none());
        assert!(Ticker::parse("\t\n ").is_none());
    }

    #[test]
    fn punctuation_only_input_is_rejected() {
        assert!(Ticker::parse("..").is_none());
        assert!(Ticker::parse(" . ").is_none());
        assert!(Ticker::parse("/").is_none());
        assert_eq!(Ticker::parse("../health").unwrap().as_str(), "../HEALTH");
    }

    #[test]
    fn inner_whitespace_is_preserved() {
        // Only the ends are trimmed; the backend decides what an odd symbol means.
        assert_eq!(Ticker::parse(" a b ").unwrap().as_str(), "A B");
    }
}
