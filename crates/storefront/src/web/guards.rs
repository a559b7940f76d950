//! Guard components wrapping a page.
//!
//! Each renders its children when the guard passes and a `<Redirect>` when it
//! does not. The session comes from context.

use leptos::*;
use leptos_router::*;

use booknest_auth::{GuardOutcome, Role, RouteGuard, SessionManager};

use super::storage::LocalStorage;

pub type WebSession = SessionManager<LocalStorage>;

fn guarded(guard: RouteGuard, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<WebSession>();
    move || match guard.evaluate(&session) {
        GuardOutcome::Render => children().into_view(),
        GuardOutcome::Redirect(to) => view! { <Redirect path=to/> }.into_view(),
    }
}

/// Signed-out visitors only.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(RouteGuard::Public, children)
}

/// Any signed-in visitor.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    guarded(RouteGuard::Private, children)
}

#[component]
pub fn RoleBasedRoute(allowed_roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    guarded(RouteGuard::RoleBased(allowed_roles), children)
}
