//! Route table and navigation model.
//!
//! Paths map to pages through a fixed table; each entry carries the guard that
//! decides whether the page renders for the current session.

use std::collections::BTreeMap;

use serde::Serialize;

use booknest_auth::{GuardOutcome, LOGIN_PATH, Role, RouteGuard, SessionManager, SessionStore, UNAUTHORIZED_PATH};

/// Redirect hops followed before navigation gives up.
pub const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Login,
    Register,
    ForgotPassword,
    ResetSuccessful,
    Home,
    Books,
    BookDetail,
    Profile,
    Cart,
    Orders,
    AdminBooks,
    AdminOrders,
    Unauthorized,
    NotFound,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Register => "Register",
            Page::ForgotPassword => "Forgot Password",
            Page::ResetSuccessful => "Password Reset",
            Page::Home => "Home",
            Page::Books => "Books",
            Page::BookDetail => "Book Details",
            Page::Profile => "Profile",
            Page::Cart => "Cart",
            Page::Orders => "Orders",
            Page::AdminBooks => "Admin Books",
            Page::AdminOrders => "Admin Orders",
            Page::Unauthorized => "Unauthorized",
            Page::NotFound => "Not Found",
        }
    }
}

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    /// Absolute pattern; `:name` segments capture a parameter.
    pub pattern: &'static str,
    pub page: Page,
    /// `None` renders for everyone.
    pub guard: Option<RouteGuard>,
}

impl RouteDef {
    fn new(pattern: &'static str, page: Page, guard: Option<RouteGuard>) -> Self {
        Self { pattern, page, guard }
    }

    /// Match `path` against the pattern, capturing `:param` segments.
    fn capture(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let mut wanted = segments(self.pattern);
        let mut given = segments(path);
        let mut params = BTreeMap::new();

        loop {
            match (wanted.next(), given.next()) {
                (None, None) => return Some(params),
                (Some(w), Some(g)) => match w.strip_prefix(':') {
                    Some(name) => {
                        params.insert(name.to_string(), g.to_string());
                    }
                    None if w == g => {}
                    None => return None,
                },
                _ => return None,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// The storefront's routes, in match order.
pub fn routes() -> Vec<RouteDef> {
    let public = || Some(RouteGuard::Public);
    let private = || Some(RouteGuard::Private);
    let user = || Some(RouteGuard::role_based([Role::User]));
    let admin = || Some(RouteGuard::role_based([Role::Admin]));

    vec![
        RouteDef::new("/login", Page::Login, public()),
        RouteDef::new("/register", Page::Register, public()),
        RouteDef::new("/forgot-password", Page::ForgotPassword, public()),
        RouteDef::new("/reset-successful", Page::ResetSuccessful, public()),
        RouteDef::new("/", Page::Home, private()),
        RouteDef::new("/books", Page::Books, private()),
        RouteDef::new("/books/:id", Page::BookDetail, private()),
        RouteDef::new("/cart", Page::Cart, user()),
        RouteDef::new("/orders", Page::Orders, user()),
        RouteDef::new("/admin/books", Page::AdminBooks, admin()),
        RouteDef::new("/admin/orders", Page::AdminOrders, admin()),
        RouteDef::new("/profile", Page::Profile, private()),
        RouteDef::new(UNAUTHORIZED_PATH, Page::Unauthorized, None),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    pub guard: Option<RouteGuard>,
    pub params: BTreeMap<String, String>,
}

/// Resolve a path to its route. Query strings and fragments are ignored;
/// unknown paths land on [`Page::NotFound`], which is unguarded.
pub fn match_route(path: &str) -> RouteMatch {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    routes()
        .into_iter()
        .find_map(|route| {
            route.capture(path).map(|params| RouteMatch {
                page: route.page,
                guard: route.guard,
                params,
            })
        })
        .unwrap_or(RouteMatch {
            page: Page::NotFound,
            guard: None,
            params: BTreeMap::new(),
        })
}

/// Where a navigation ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Final path after redirects.
    pub path: String,
    pub page: Page,
    pub params: BTreeMap<String, String>,
    /// Redirect targets in the order they were followed.
    pub redirects: Vec<&'static str>,
}

/// Navigate to `path`, following guard redirects until a page renders.
pub fn navigate<S: SessionStore>(session: &SessionManager<S>, path: &str) -> Navigation {
    let mut current = path.to_string();
    let mut redirects = Vec::new();

    loop {
        let route = match_route(&current);
        let outcome = route
            .guard
            .as_ref()
            .map_or(GuardOutcome::Render, |guard| guard.evaluate(session));

        match outcome {
            GuardOutcome::Render => {
                return Navigation {
                    path: current,
                    page: route.page,
                    params: route.params,
                    redirects,
                };
            }
            GuardOutcome::Redirect(to) if redirects.len() < MAX_REDIRECTS => {
                redirects.push(to);
                current = to.to_string();
            }
            GuardOutcome::Redirect(_) => {
                tracing::warn!(path, hops = redirects.len(), "redirect loop; showing unauthorized page");
                return Navigation {
                    path: UNAUTHORIZED_PATH.to_string(),
                    page: Page::Unauthorized,
                    params: BTreeMap::new(),
                    redirects,
                };
            }
        }
    }
}

/// Header link.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const fn link(label: &'static str, path: &'static str) -> NavLink {
    NavLink { label, path }
}

/// Header links for the visitor's role; none without a role.
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let Some(role) = role else {
        return Vec::new();
    };

    let mut links = vec![link("Home", "/"), link("Books", "/books")];
    if role.is_admin() {
        links.extend([link("Admin Books", "/admin/books"), link("Admin Orders", "/admin/orders")]);
    } else {
        links.extend([link("Cart", "/cart"), link("Orders", "/orders")]);
    }
    links.push(link("Profile", "/profile"));
    links
}

/// Auth pages render without the site header.
pub fn is_auth_page(path: &str) -> bool {
    matches!(
        path,
        LOGIN_PATH | "/register" | "/forgot-password" | "/reset-successful"
    )
}
