//! Typed wrappers over the backend resources.
//!
//! One function per endpoint; each issues exactly one request through
//! [`ApiClient`](crate::ApiClient).

pub mod auth;
pub mod authors;
pub mod books;
pub mod cart;
pub mod categories;
pub mod orders;
pub mod publishers;
