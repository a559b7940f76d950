//! Route guards.
//!
//! Guards are pure predicates over the session at render time. They never
//! change the session and keep no state between navigations.

use crate::session::SessionManager;
use crate::storage::SessionStore;
use crate::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Access policy attached to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteGuard {
    /// Only for signed-out visitors (login, register, password reset).
    Public,
    /// Any signed-in visitor.
    Private,
    /// Signed-in visitors holding one of the listed roles.
    RoleBased(Vec<Role>),
}

/// What the router should do with the current navigation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(&'static str),
}

/// A view that passed its guard, or where to go instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(&'static str),
}

impl<V> Guarded<V> {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Guarded::Render(_) => None,
            Guarded::Redirect(path) => Some(*path),
        }
    }

    pub fn into_view(self) -> Option<V> {
        match self {
            Guarded::Render(view) => Some(view),
            Guarded::Redirect(_) => None,
        }
    }
}

impl RouteGuard {
    pub fn role_based(roles: impl IntoIterator<Item = Role>) -> Self {
        RouteGuard::RoleBased(roles.into_iter().collect())
    }

    pub fn evaluate<S: SessionStore>(&self, session: &SessionManager<S>) -> GuardOutcome {
        let outcome = match self {
            RouteGuard::Public if session.is_authenticated() => GuardOutcome::Redirect(HOME_PATH),
            RouteGuard::Public => GuardOutcome::Render,
            RouteGuard::Private if !session.is_authenticated() => GuardOutcome::Redirect(LOGIN_PATH),
            RouteGuard::Private => GuardOutcome::Render,
            RouteGuard::RoleBased(allowed) => match session.get_role() {
                None => GuardOutcome::Redirect(LOGIN_PATH),
                Some(role) if !allowed.contains(&role) => GuardOutcome::Redirect(UNAUTHORIZED_PATH),
                Some(_) => GuardOutcome::Render,
            },
        };

        if let GuardOutcome::Redirect(to) = outcome {
            tracing::debug!(guard = ?self, redirect = to, "route guard redirected");
        }
        outcome
    }

    /// Evaluate and wrap `view`; the view is dropped on redirect.
    pub fn resolve<V, S: SessionStore>(&self, session: &SessionManager<S>, view: V) -> Guarded<V> {
        match self.evaluate(session) {
            GuardOutcome::Render => Guarded::Render(view),
            GuardOutcome::Redirect(to) => Guarded::Redirect(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::tests::{ADMIN_TOKEN, USER_TOKEN};
    use crate::storage::{MemoryStore, SessionKey};

    fn session() -> SessionManager<MemoryStore> {
        SessionManager::new(MemoryStore::new())
    }

    #[test]
    fn public_renders_when_signed_out() {
        let s = session();
        assert_eq!(RouteGuard::Public.resolve(&s, "public"), Guarded::Render("public"));
    }

    #[test]
    fn public_redirects_home_when_token_present() {
        let s = session();
        s.store().set(SessionKey::Token, "token").unwrap();
        assert_eq!(RouteGuard::Public.evaluate(&s), GuardOutcome::Redirect(HOME_PATH));
    }

    #[test]
    fn public_ignores_stale_role_without_token() {
        let s = session();
        s.store().set(SessionKey::Role, "USER").unwrap();
        assert_eq!(RouteGuard::Public.evaluate(&s), GuardOutcome::Render);
    }

    #[test]
    fn private_redirects_to_login_without_token() {
        let s = session();
        assert_eq!(
            RouteGuard::Private.resolve(&s, "private"),
            Guarded::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn private_renders_with_token() {
        let s = session();
        s.store().set(SessionKey::Token, "token").unwrap();
        assert_eq!(RouteGuard::Private.resolve(&s, "private").into_view(), Some("private"));
    }

    #[test]
    fn role_based_redirects_to_login_without_role() {
        let s = session();
        let guard = RouteGuard::role_based([Role::Admin]);
        assert_eq!(guard.evaluate(&s), GuardOutcome::Redirect(LOGIN_PATH));
    }

    #[test]
    fn role_based_rejects_other_roles() {
        let s = session();
        s.store().set(SessionKey::Role, "USER").unwrap();
        let guard = RouteGuard::role_based([Role::Admin]);
        assert_eq!(
            guard.resolve(&s, "admin").redirect_target(),
            Some(UNAUTHORIZED_PATH)
        );
    }

    #[test]
    fn role_based_renders_allowed_role() {
        let s = session();
        s.store().set(SessionKey::Role, "ADMIN").unwrap();
        let guard = RouteGuard::role_based([Role::Admin]);
        assert_eq!(guard.resolve(&s, "admin"), Guarded::Render("admin"));
    }

    #[test]
    fn role_based_reads_role_from_token_claims() {
        let s = session();
        s.sync_auth_session(USER_TOKEN);
        s.store().remove(SessionKey::Role).unwrap();

        let cart = RouteGuard::role_based([Role::User]);
        let admin = RouteGuard::role_based([Role::Admin]);
        assert_eq!(cart.evaluate(&s), GuardOutcome::Render);
        assert_eq!(admin.evaluate(&s), GuardOutcome::Redirect(UNAUTHORIZED_PATH));
    }

    #[test]
    fn guards_follow_login_and_logout() {
        let s = session();
        let admin = RouteGuard::role_based([Role::Admin]);

        s.sync_auth_session(ADMIN_TOKEN);
        assert_eq!(admin.evaluate(&s), GuardOutcome::Render);
        assert_eq!(RouteGuard::Public.evaluate(&s), GuardOutcome::Redirect(HOME_PATH));

        s.clear_auth_session();
        assert_eq!(admin.evaluate(&s), GuardOutcome::Redirect(LOGIN_PATH));
        assert_eq!(RouteGuard::Private.evaluate(&s), GuardOutcome::Redirect(LOGIN_PATH));
        assert_eq!(RouteGuard::Public.evaluate(&s), GuardOutcome::Render);
    }

    #[test]
    fn empty_allow_list_never_renders() {
        let s = session();
        s.sync_auth_session(ADMIN_TOKEN);
        assert_eq!(
            RouteGuard::RoleBased(Vec::new()).evaluate(&s),
            GuardOutcome::Redirect(UNAUTHORIZED_PATH)
        );
    }
}
