//! Auth session provider: the single owner of per-tab session state.

use serde::Serialize;
use thiserror::Error;

use campuserp_auth::{Principal, Role, TokenPair, decode_unverified};

use crate::store::TokenStore;

/// Login form payload forwarded to the authentication endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Failure surfaced by `login`/`refresh`.
///
/// The session is never left authenticated-but-unverified behind one of
/// these: login failures leave it unchanged, refresh failures clear it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The authentication endpoint rejected the call or was unreachable.
    #[error("authentication request failed: {0}")]
    Api(String),

    #[error("no refresh token to exchange")]
    MissingRefreshToken,

    /// The endpoint returned a token whose payload cannot be read.
    #[error("received token payload is unreadable")]
    InvalidTokenPayload,
}

/// The external authentication endpoint, as seen from the client.
///
/// Implementations wrap whatever HTTP client the portal uses; tests supply
/// in-memory fakes. These calls are the session's only suspension points.
pub trait AuthApi {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<TokenPair, SessionError>>;

    fn refresh(
        &self,
        refresh_token: &str,
    ) -> impl Future<Output = Result<TokenPair, SessionError>>;
}

/// Read surface the route guards consume.
pub trait SessionState {
    fn user(&self) -> Option<&Principal>;

    /// True while a login/refresh call is in flight. Guards must not judge
    /// a loading session as either authenticated or unauthenticated.
    fn loading(&self) -> bool;

    /// Presence check on the persisted access token only.
    ///
    /// Deliberately does NOT verify signature or expiry: client-side state
    /// is a UX affordance, not a security boundary. The server re-verifies
    /// every request.
    fn is_authenticated(&self) -> bool;
}

/// Exclusive owner of the in-memory session for a tab.
///
/// All transitions happen on the UI event loop in response to discrete
/// events (mount, login, refresh, logout). One logical writer, so there is
/// no locking around `user`/`loading`.
pub struct SessionProvider<S, A> {
    store: S,
    api: A,
    user: Option<Principal>,
    loading: bool,
}

impl<S: TokenStore, A: AuthApi> SessionProvider<S, A> {
    /// Mount-time init: adopt a persisted access token if one exists.
    ///
    /// The decoded user is tentative until the server verifies a request.
    /// An unreadable payload or unknown role leaves `user` unset, which
    /// guards treat exactly like being unauthenticated.
    pub fn init(store: S, api: A) -> Self {
        let user = store
            .access_token()
            .as_deref()
            .and_then(principal_from_token);
        Self {
            store,
            api,
            user,
            loading: false,
        }
    }

    /// Call the authentication endpoint and establish the session.
    ///
    /// On success the received tokens are persisted exactly as returned and
    /// `user` is set from the decoded access token. On failure the session
    /// is left as it was.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), SessionError> {
        self.loading = true;
        let result = self.api.login(credentials).await;
        self.loading = false;

        let pair = result?;
        let user =
            principal_from_token(&pair.access_token).ok_or(SessionError::InvalidTokenPayload)?;

        self.store.store(&pair);
        self.user = Some(user);
        Ok(())
    }

    /// Clear persisted tokens and the in-memory user.
    ///
    /// Synchronous and infallible; calling it twice leaves the session in
    /// the same unauthenticated state as calling it once.
    pub fn logout(&mut self) {
        self.store.clear();
        self.user = None;
        self.loading = false;
    }

    /// Exchange the refresh token for a new token pair.
    ///
    /// Any failure (missing token, rejected exchange, unreadable payload)
    /// forces logout semantics before the error is returned, so a stale
    /// half-authenticated session cannot survive a failed refresh.
    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        let Some(refresh_token) = self.store.refresh_token().filter(|t| !t.is_empty()) else {
            self.logout();
            return Err(SessionError::MissingRefreshToken);
        };

        self.loading = true;
        let result = self.api.refresh(&refresh_token).await;
        self.loading = false;

        match result {
            Ok(pair) => match principal_from_token(&pair.access_token) {
                Some(user) => {
                    self.store.store(&pair);
                    self.user = Some(user);
                    Ok(())
                }
                None => {
                    self.logout();
                    Err(SessionError::InvalidTokenPayload)
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "token refresh failed; clearing session");
                self.logout();
                Err(err)
            }
        }
    }
}

impl<S: TokenStore, A: AuthApi> SessionState for SessionProvider<S, A> {
    fn user(&self) -> Option<&Principal> {
        self.user.as_ref()
    }

    fn loading(&self) -> bool {
        self.loading
    }

    fn is_authenticated(&self) -> bool {
        matches!(self.store.access_token(), Some(token) if !token.is_empty())
    }
}

/// Advisory decode of an access token payload into a principal.
///
/// No signature or expiry check; unknown roles are rejected here so an
/// invalid role never reaches guard logic.
fn principal_from_token(token: &str) -> Option<Principal> {
    let claims = decode_unverified(token)?;
    let role = Role::parse(&claims.role)?;
    Some(Principal {
        id: claims.sub,
        email: claims.email,
        role,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::Duration;
    use uuid::Uuid;

    use campuserp_auth::{AuthConfig, TokenIssuer};

    use super::*;
    use crate::store::MemoryTokenStore;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&AuthConfig {
            access_secret: "access-secret".to_string(),
            refresh_secret: "refresh-secret".to_string(),
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(7),
        })
    }

    fn pair_for(role: Role) -> TokenPair {
        let principal = Principal::new(Uuid::now_v7(), "user@school.test", role);
        issuer().issue_pair(&principal).unwrap()
    }

    /// Fake endpoint returning queued responses.
    struct FakeApi {
        responses: RefCell<Vec<Result<TokenPair, SessionError>>>,
    }

    impl FakeApi {
        fn with(responses: Vec<Result<TokenPair, SessionError>>) -> Self {
            Self {
                responses: RefCell::new(responses),
            }
        }

        fn rejecting() -> Self {
            Self::with(vec![])
        }
    }

    impl AuthApi for FakeApi {
        async fn login(&self, _credentials: &Credentials) -> Result<TokenPair, SessionError> {
            self.next()
        }

        async fn refresh(&self, _refresh_token: &str) -> Result<TokenPair, SessionError> {
            self.next()
        }
    }

    impl FakeApi {
        fn next(&self) -> Result<TokenPair, SessionError> {
            if self.responses.borrow().is_empty() {
                return Err(SessionError::Api("rejected".to_string()));
            }
            self.responses.borrow_mut().remove(0)
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "user@school.test".to_string(),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn login_persists_exactly_the_received_tokens() {
        let pair = pair_for(Role::Teacher);
        let api = FakeApi::with(vec![Ok(pair.clone())]);
        let mut session = SessionProvider::init(MemoryTokenStore::new(), api);

        assert!(!session.is_authenticated());
        session.login(&credentials()).await.unwrap();

        assert!(session.is_authenticated());
        assert_eq!(
            session.store.access_token().as_deref(),
            Some(pair.access_token.as_str())
        );
        assert_eq!(
            session.store.refresh_token().as_deref(),
            Some(pair.refresh_token.as_str())
        );
        assert_eq!(session.user().unwrap().role, Role::Teacher);
        assert!(!session.loading());
    }

    #[tokio::test]
    async fn failed_login_leaves_session_unchanged() {
        let mut session = SessionProvider::init(MemoryTokenStore::new(), FakeApi::rejecting());

        let err = session.login(&credentials()).await.unwrap_err();
        assert_eq!(err, SessionError::Api("rejected".to_string()));
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.loading());
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let api = FakeApi::with(vec![Ok(pair_for(Role::Student))]);
        let mut session = SessionProvider::init(MemoryTokenStore::new(), api);
        session.login(&credentials()).await.unwrap();

        session.logout();
        let after_once = (session.is_authenticated(), session.user().cloned());
        session.logout();
        let after_twice = (session.is_authenticated(), session.user().cloned());

        assert_eq!(after_once, (false, None));
        assert_eq!(after_once, after_twice);
    }

    #[tokio::test]
    async fn refresh_failure_forces_logout() {
        let api = FakeApi::with(vec![Ok(pair_for(Role::Parent))]);
        let mut session = SessionProvider::init(MemoryTokenStore::new(), api);
        session.login(&credentials()).await.unwrap();
        assert!(session.is_authenticated());

        session.refresh().await.unwrap_err();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(session.store.refresh_token(), None);
    }

    #[tokio::test]
    async fn refresh_without_token_logs_out() {
        let mut session = SessionProvider::init(MemoryTokenStore::new(), FakeApi::rejecting());
        let err = session.refresh().await.unwrap_err();
        assert_eq!(err, SessionError::MissingRefreshToken);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn refresh_swaps_in_the_new_pair() {
        let first = pair_for(Role::Teacher);
        let second = pair_for(Role::Teacher);
        let api = FakeApi::with(vec![Ok(first), Ok(second.clone())]);
        let mut session = SessionProvider::init(MemoryTokenStore::new(), api);
        session.login(&credentials()).await.unwrap();

        session.refresh().await.unwrap();
        assert_eq!(
            session.store.access_token().as_deref(),
            Some(second.access_token.as_str())
        );
        assert_eq!(
            session.store.refresh_token().as_deref(),
            Some(second.refresh_token.as_str())
        );
    }

    #[tokio::test]
    async fn init_adopts_persisted_token_tentatively() {
        let store = MemoryTokenStore::new();
        store.store(&pair_for(Role::SchoolAdmin));

        let session = SessionProvider::init(store, FakeApi::rejecting());
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().role, Role::SchoolAdmin);
        assert!(!session.loading());
    }

    #[tokio::test]
    async fn presence_check_does_not_validate_the_token() {
        let store = MemoryTokenStore::new();
        store.store(&TokenPair {
            access_token: "opaque-garbage".to_string(),
            refresh_token: "also-garbage".to_string(),
        });

        // A non-empty token counts as present even though it is unreadable;
        // the user stays unset and guards fail closed on the role side.
        let session = SessionProvider::init(store, FakeApi::rejecting());
        assert!(session.is_authenticated());
        assert!(session.user().is_none());
    }
}
