//! The storefront shell: session, API client and navigation in one place.

use booknest_api::dto::LoginInput;
use booknest_api::services::auth;
use booknest_api::{ApiClient, ApiResult};
use booknest_auth::{HOME_PATH, LOGIN_PATH, SessionManager, SessionStore};

use crate::routes::{NavLink, Navigation, is_auth_page, nav_links, navigate};

/// Application state shared by every page.
#[derive(Clone)]
pub struct Storefront<S> {
    api: ApiClient<S>,
}

impl<S: SessionStore> Storefront<S> {
    pub fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<S> {
        &self.api
    }

    pub fn session(&self) -> &SessionManager<S> {
        self.api.session()
    }

    /// Sign in and land on the home page.
    ///
    /// The session is untouched when the backend refuses the credentials.
    pub async fn login(&self, input: &LoginInput) -> ApiResult<Navigation> {
        let response = auth::login(&self.api, input).await?;
        self.session().sync_auth_session(&response.token);
        tracing::info!(message = %response.message, "signed in");
        Ok(self.open(HOME_PATH))
    }

    pub fn logout(&self) -> Navigation {
        self.session().clear_auth_session();
        self.open(LOGIN_PATH)
    }

    /// Resolve `path` for the current session.
    pub fn open(&self, path: &str) -> Navigation {
        navigate(self.session(), path)
    }

    /// Header links for `path`; `None` where the header is hidden.
    pub fn header(&self, path: &str) -> Option<Vec<NavLink>> {
        if is_auth_page(path) {
            return None;
        }
        Some(nav_links(self.session().get_role()))
    }
}
