//! `booknest-auth`: client-side session and role authorization.
//!
//! Token claims extraction, the persisted session, and the route guards that
//! decide what a visitor may see. This crate performs no HTTP and owns no
//! storage technology; backends plug in through [`SessionStore`].

pub mod claims;
pub mod guards;
pub mod roles;
pub mod session;
pub mod storage;

pub use claims::{TokenClaims, decode_token, normalize_base64};
pub use guards::{GuardOutcome, Guarded, HOME_PATH, LOGIN_PATH, RouteGuard, UNAUTHORIZED_PATH};
pub use roles::Role;
pub use session::{Session, SessionManager, SessionState};
pub use storage::{MemoryStore, SessionKey, SessionStore, StoreError};
