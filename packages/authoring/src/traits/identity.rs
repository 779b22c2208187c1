//! The identity seam: who is authoring.

/// Source of the acting user's id.
///
/// Synchronous on purpose: implementations read an already-established
/// session (a config value, a token claim), they do not authenticate.
pub trait Identity: Send + Sync {
    /// The acting user's id, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<String>;
}

/// Identity fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedIdentity {
    user_id: Option<String>,
}

impl FixedIdentity {
    /// Act as the given user.
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            user_id: Some(id.into()),
        }
    }

    /// Act as nobody; posts created this way carry no author.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }
}

impl Identity for FixedIdentity {
    fn current_user(&self) -> Option<String> {
        self.user_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_identity() {
        assert_eq!(
            FixedIdentity::user("user-7").current_user(),
            Some("user-7".to_string())
        );
        assert_eq!(FixedIdentity::anonymous().current_user(), None);
    }
}
