//! Utility functions and types.

use std::fmt::{Debug, Formatter};

/// Redact hides secrets when credentials are printed with `{:?}`.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 characters prints `***`.
/// - Longer input keeps its first and last three characters, so different
///   redacted values can still be told apart.
///
/// Characters are counted as `char`s, multi-byte input never splits a code point.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let count = self.0.chars().count();
        if count == 0 {
            return f.write_str("EMPTY");
        }
        if count < 12 {
            return f.write_str("***");
        }

        let head: String = self.0.chars().take(3).collect();
        let tail: String = self.0.chars().skip(count - 3).collect();
        write!(f, "{head}***{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "EMPTY"; "empty")]
    #[test_case("ck", "***"; "short")]
    #[test_case("HelloWorld!", "***"; "eleven chars")]
    #[test_case("xvz1evFS4wEEPTGEFPHBog", "xvz***Bog"; "consumer key")]
    #[test_case("ключ-потребителя", "клю***еля"; "multibyte")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact::from(input)), expected);
    }
}
