//! REST client for the bookstore backend.
//!
//! [`ApiClient`] carries the session's bearer token on every request and
//! signs the visitor out when the backend rejects it. The `services` modules
//! are thin typed wrappers, one request each.

pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod services;

pub use client::{ApiClient, UnauthorizedHandler};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
