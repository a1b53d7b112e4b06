//! Bearer token sources
//!
//! The identity provider (login, refresh flows) lives outside this crate.
//! The client only needs a way to read the current bearer token, so that
//! seam is a trait. The token is read on every request: a token refreshed
//! by the provider between calls is picked up without rebuilding the client.

use std::sync::{Arc, RwLock};

/// Source of the current bearer token.
///
/// Implemented by whatever owns the identity session. Any
/// `Fn() -> String` closure works too, which keeps tests short.
pub trait TokenProvider: Send + Sync {
    /// Return the bearer token to use for the next request.
    fn token(&self) -> String;
}

impl<F> TokenProvider for F
where
    F: Fn() -> String + Send + Sync,
{
    fn token(&self) -> String {
        self()
    }
}

/// A fixed token that never changes. Useful for tests and short-lived tools.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> String {
        self.0.clone()
    }
}

/// A token slot an external refresher can update while clients keep reading.
///
/// Clone is cheap; all clones observe the latest `set`.
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    inner: Arc<RwLock<String>>,
}

impl SharedToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(token.into())),
        }
    }

    /// Replace the stored token. Subsequent requests use the new value.
    pub fn set(&self, token: impl Into<String>) {
        *self.inner.write().expect("token lock poisoned") = token.into();
    }
}

impl TokenProvider for SharedToken {
    fn token(&self) -> String {
        self.inner.read().expect("token lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token() {
        let token = StaticToken::new("abc");
        assert_eq!(token.token(), "abc");
        assert_eq!(token.token(), "abc");
    }

    #[test]
    fn test_shared_token_refresh_visible_to_clones() {
        let token = SharedToken::new("first");
        let clone = token.clone();
        assert_eq!(clone.token(), "first");

        token.set("second");
        assert_eq!(clone.token(), "second");
    }

    #[test]
    fn test_closure_provider() {
        let provider = || "from-closure".to_string();
        assert_eq!(provider.token(), "from-closure");
    }
}
