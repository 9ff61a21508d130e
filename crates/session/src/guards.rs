//! Route guards: render-time gates evaluated at protected page boundaries.
//!
//! Two composable checks — "is a session present" and "does the role
//! satisfy the required set" — with a fixed ordering: presence first, so a
//! session with no token never reaches role evaluation.

use campuserp_auth::{LOGIN_ROUTE, Role};

use crate::provider::SessionState;

/// Fire-and-forget navigation primitive.
///
/// A redirect cancels no in-flight request; the guard that issued it stops
/// rendering instead (returns [`GuardOutcome::Suppress`]) so a second
/// redirect can never race the first.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// What the page boundary should do after a guard ran.
///
/// `Suppress` models rendering nothing: either a redirect was just issued
/// or authorization is still resolving. Protected content must never flash
/// before the decision lands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Suppress,
}

/// Presence gate: a persisted token or the login page, nothing in between.
///
/// Consults token presence only; roles are never evaluated here, and the
/// loading state is settled by [`guard_route`] before this gate runs.
pub fn presence_guard(session: &impl SessionState, nav: &impl Navigator) -> GuardOutcome {
    if session.is_authenticated() {
        GuardOutcome::Render
    } else {
        nav.redirect(LOGIN_ROUTE);
        GuardOutcome::Suppress
    }
}

/// Role gate for a protected page.
pub struct RoleGuard {
    allowed: Vec<Role>,
    /// Explicit target for authenticated-but-wrong-role visitors; defaults
    /// to the visitor's own dashboard.
    fallback: Option<String>,
}

impl RoleGuard {
    pub fn new(allowed: impl Into<Vec<Role>>) -> Self {
        Self {
            allowed: allowed.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, path: impl Into<String>) -> Self {
        self.fallback = Some(path.into());
        self
    }

    /// Evaluate once the session has resolved.
    ///
    /// Fail closed: a missing or undecodable role is treated exactly like
    /// being unauthenticated. A valid role outside the allowed set is sent
    /// to its own dashboard (or the explicit fallback), never back to the
    /// requested page, so redirects cannot loop.
    pub fn evaluate(&self, session: &impl SessionState, nav: &impl Navigator) -> GuardOutcome {
        if session.loading() {
            // Still resolving; neither authenticated nor not.
            return GuardOutcome::Suppress;
        }

        if !session.is_authenticated() {
            nav.redirect(LOGIN_ROUTE);
            return GuardOutcome::Suppress;
        }

        let Some(user) = session.user() else {
            // Token present but no decodable principal behind it.
            nav.redirect(LOGIN_ROUTE);
            return GuardOutcome::Suppress;
        };

        if self.allowed.contains(&user.role) {
            GuardOutcome::Render
        } else {
            match &self.fallback {
                Some(path) => nav.redirect(path),
                None => nav.redirect(user.role.dashboard()),
            }
            GuardOutcome::Suppress
        }
    }
}

/// Compose both gates with the ordering guarantee: presence strictly before
/// role evaluation.
///
/// A loading session suppresses up front: while a login or refresh is in
/// flight the persisted tokens are in motion, so neither gate may judge
/// the session as authenticated or not.
pub fn guard_route(
    session: &impl SessionState,
    nav: &impl Navigator,
    guard: &RoleGuard,
) -> GuardOutcome {
    if session.loading() {
        return GuardOutcome::Suppress;
    }

    match presence_guard(session, nav) {
        GuardOutcome::Suppress => GuardOutcome::Suppress,
        GuardOutcome::Render => guard.evaluate(session, nav),
    }
}
