//! Bearer token handling with secure memory.
//!
//! Uses the `secrecy` crate to prevent accidental logging of credentials.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A bearer token that won't be logged or displayed.
///
/// Uses `secrecy::SecretBox` so tokens never leak into logs, debug
/// output, or error messages.
pub struct ApiToken(SecretBox<str>);

impl ApiToken {
    /// Create a new token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the token value for use.
    ///
    /// Only call this when actually attaching the token to a request.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiToken {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for ApiToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_not_in_debug() {
        let token = ApiToken::new("st-super-secret-token");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("st-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_token_not_in_display() {
        let token = ApiToken::new("st-super-secret-token");
        let display = format!("{}", token);
        assert!(!display.contains("st-super"));
        assert!(display.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_works() {
        let token = ApiToken::new("st-super-secret-token");
        assert_eq!(token.expose(), "st-super-secret-token");
    }
}
