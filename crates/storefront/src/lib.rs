//! `booknest-storefront`
//!
//! **Responsibility:** the BookNest storefront shell.
//!
//! This crate provides:
//! - The route table and the navigation model (which page a path renders,
//!   which header links a role sees)
//! - Login/logout flows over the session and the API client
//! - Session backends: a JSON file for native hosts, `localStorage` in the
//!   browser
//!
//! The backend API is the authority for data and for the token's validity.

pub mod app;
pub mod routes;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::Storefront;
pub use routes::{Navigation, NavLink, Page, RouteDef, RouteMatch, is_auth_page, match_route, nav_links, navigate, routes};

#[cfg(not(target_arch = "wasm32"))]
pub use config::StorefrontConfig;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;
