use std::sync::Mutex;

use campuserp_auth::TokenPair;

/// Fixed storage keys for the two persisted credentials. No other schema.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Persisted-credential accessor: exactly two string values under fixed
/// keys.
///
/// The persisted copy is a cache. The session provider reads it once at
/// init and writes it on change; for the lifetime of a tab the in-memory
/// session is authoritative, not this store.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store(&self, pair: &TokenPair);
    fn clear(&self);
}

/// In-process token store (the browser-storage analog).
///
/// Single logical writer (the session provider); the mutex only satisfies
/// shared-reference mutation, it is never contended.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Tokens>,
}

#[derive(Debug, Default)]
struct Tokens {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tokens(&self) -> std::sync::MutexGuard<'_, Tokens> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens().access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens().refresh.clone()
    }

    fn store(&self, pair: &TokenPair) {
        let mut tokens = self.tokens();
        tokens.access = Some(pair.access_token.clone());
        tokens.refresh = Some(pair.refresh_token.clone());
    }

    fn clear(&self) {
        let mut tokens = self.tokens();
        tokens.access = None;
        tokens.refresh = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_read_returns_exact_values() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.access_token(), None);

        let pair = TokenPair {
            access_token: "a.b.c".to_string(),
            refresh_token: "d.e.f".to_string(),
        };
        store.store(&pair);
        assert_eq!(store.access_token().as_deref(), Some("a.b.c"));
        assert_eq!(store.refresh_token().as_deref(), Some("d.e.f"));
    }

    #[test]
    fn clear_removes_both_values() {
        let store = MemoryTokenStore::new();
        store.store(&TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        });
        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        // Clearing an already empty store is a no-op.
        store.clear();
        assert_eq!(store.access_token(), None);
    }
}
