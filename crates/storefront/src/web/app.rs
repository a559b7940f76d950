//! Leptos application shell.

use leptos::*;
use leptos_router::*;

use booknest_api::dto::LoginInput;
use booknest_api::{ApiClient, ApiConfig, config::DEFAULT_API_BASE};
use booknest_auth::{LOGIN_PATH, RouteGuard};

use super::guards::{PrivateRoute, PublicRoute, RoleBasedRoute, WebSession};
use super::storage::LocalStorage;
use crate::app::Storefront;
use crate::routes::{Page, match_route};

type WebStorefront = Storefront<LocalStorage>;

/// Send the browser to the login page after the backend rejects the token.
fn redirect_to_login() {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return;
    };
    if location.pathname().ok().as_deref() != Some(LOGIN_PATH) {
        let _ = location.set_href(LOGIN_PATH);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = WebSession::new(LocalStorage);
    let config = ApiConfig::new(option_env!("BOOKNEST_API_BASE").unwrap_or(DEFAULT_API_BASE));
    let api = ApiClient::new(config, session.clone()).with_unauthorized_handler(redirect_to_login);

    provide_context(session);
    provide_context(Storefront::new(api));

    view! {
        <Router>
            <div class="bn-shell">
                <SiteHeader/>
                <main class="bn-main">
                    <Routes>
                        <Route path="/*any" view=CurrentPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    let storefront = expect_context::<WebStorefront>();
    let location = use_location();
    let navigate = use_navigate();

    let on_logout = {
        let storefront = storefront.clone();
        move |_: ev::MouseEvent| {
            let nav = storefront.logout();
            navigate(&nav.path, Default::default());
        }
    };

    move || {
        let links = storefront.header(&location.pathname.get())?;
        let nav = (!links.is_empty()).then(|| {
            let on_logout = on_logout.clone();
            view! {
                <nav>
                    {links
                        .iter()
                        .map(|link| view! { <A href=link.path class="app-link">{link.label}</A> })
                        .collect_view()}
                    <button type="button" aria-label="Logout" on:click=on_logout>
                        "Logout"
                    </button>
                </nav>
            }
        });
        Some(view! {
            <header class="bn-header">
                <h2>"BookNest"</h2>
                {nav}
            </header>
        })
    }
}

/// Resolves the current path through the route table and its guard.
#[component]
fn CurrentPage() -> impl IntoView {
    let location = use_location();

    move || {
        let route = match_route(&location.pathname.get());
        let page = route.page;
        match route.guard {
            None => page_view(page),
            Some(RouteGuard::Public) => view! { <PublicRoute>{move || page_view(page)}</PublicRoute> }.into_view(),
            Some(RouteGuard::Private) => view! { <PrivateRoute>{move || page_view(page)}</PrivateRoute> }.into_view(),
            Some(RouteGuard::RoleBased(roles)) => view! {
                <RoleBasedRoute allowed_roles=roles>{move || page_view(page)}</RoleBasedRoute>
            }
            .into_view(),
        }
    }
}

fn page_view(page: Page) -> View {
    match page {
        Page::Login => view! { <LoginPage/> }.into_view(),
        other => view! { <h1 class="page-title">{other.title()}</h1> }.into_view(),
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    let storefront = expect_context::<WebStorefront>();
    let navigate = use_navigate();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let storefront = storefront.clone();
        let navigate = navigate.clone();
        let input = LoginInput {
            email: email.get_untracked().trim().to_string(),
            mobile: None,
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match storefront.login(&input).await {
                Ok(nav) => navigate(&nav.path, Default::default()),
                Err(err) => set_error.set(Some(err.banner_or("Login failed"))),
            }
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <h3 class="log-in-text">"Log in"</h3>
            <input
                name="email"
                type="email"
                placeholder="Email address"
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                name="password"
                type="password"
                placeholder="Password"
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
            <A href="/forgot-password">"Forgot Password?"</A>
            <button type="submit" class="btn-login">"Login"</button>
        </form>
    }
}
