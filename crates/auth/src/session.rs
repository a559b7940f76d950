//! Session manager: the single source of truth for who is signed in.

use serde::Serialize;

use crate::claims::decode_token;
use crate::storage::{SessionKey, SessionStore};
use crate::Role;

/// Point-in-time copy of the persisted session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Never serialized; snapshots end up in logs and UI state.
    #[serde(skip)]
    pub token: Option<String>,
    pub role: Option<Role>,
    pub user_id: Option<String>,
    pub email: Option<String>,
}

/// Authentication state as seen by the route guards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    AuthenticatedNoRole,
    Authenticated(Role),
}

/// Explicit session context handed to guards and the HTTP client.
///
/// Wraps a [`SessionStore`]; cloning the manager clones the store handle, so
/// with a shared backend every clone observes the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionManager<S> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a freshly issued token and the claims derived from it.
    ///
    /// Every cached claim is rewritten from the new token; claims the token
    /// lacks are removed rather than left over from a previous session. A role
    /// claim that is not a known role counts as absent.
    pub fn sync_auth_session(&self, token: &str) {
        self.write(SessionKey::Token, Some(token));

        let claims = decode_token(token).unwrap_or_else(|| {
            tracing::warn!("session token has no readable claims; caching none");
            Default::default()
        });

        let role = claims.role();
        if role.is_none() && claims.user_role.is_some() {
            tracing::warn!("ignoring unrecognised role claim");
        }

        self.write(SessionKey::Role, role.as_ref().map(Role::as_str));
        self.write(SessionKey::UserId, non_empty(claims.user_id.as_deref()));
        self.write(SessionKey::Email, non_empty(claims.email.as_deref()));

        tracing::info!(role = ?role, "auth session synced");
    }

    /// Forget the session. Safe to call when already signed out.
    pub fn clear_auth_session(&self) {
        for key in SessionKey::ALL {
            self.write(key, None);
        }
        tracing::info!("auth session cleared");
    }

    /// Current role.
    ///
    /// A valid cached role wins without touching the token. Otherwise the
    /// token's claim is used and cached back.
    pub fn get_role(&self) -> Option<Role> {
        if let Some(role) = self.store.get(SessionKey::Role).as_deref().and_then(Role::parse) {
            return Some(role);
        }

        let token = self.token()?;
        let role = decode_token(&token)?.role()?;

        tracing::debug!(role = %role, "restoring cached role from token claims");
        self.write(SessionKey::Role, Some(role.as_str()));
        Some(role)
    }

    /// Signed in means a token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn state(&self) -> SessionState {
        if !self.is_authenticated() {
            return SessionState::Unauthenticated;
        }
        match self.get_role() {
            Some(role) => SessionState::Authenticated(role),
            None => SessionState::AuthenticatedNoRole,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read(SessionKey::Token)
    }

    pub fn user_id(&self) -> Option<String> {
        self.read(SessionKey::UserId)
    }

    pub fn email(&self) -> Option<String> {
        self.read(SessionKey::Email)
    }

    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token(),
            role: self.get_role(),
            user_id: self.user_id(),
            email: self.email(),
        }
    }

    fn read(&self, key: SessionKey) -> Option<String> {
        self.store.get(key).filter(|v| !v.is_empty())
    }

    fn write(&self, key: SessionKey, value: Option<&str>) {
        let result = match value {
            Some(value) => self.store.set(key, value),
            None => self.store.remove(key),
        };
        if let Err(err) = result {
            tracing::warn!(key = %key, error = %err, "session storage write failed");
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
