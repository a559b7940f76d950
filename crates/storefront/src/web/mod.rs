//! Browser frontend: `localStorage` session backend and Leptos route guards.

pub mod app;
pub mod guards;
pub mod storage;

pub use guards::{PrivateRoute, PublicRoute, RoleBasedRoute};
pub use storage::LocalStorage;

use wasm_bindgen::prelude::*;

/// WASM entry point; runs when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
