//! HTTP client bound to the visitor's session.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use booknest_auth::{SessionManager, SessionStore};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Called after a bearer token was rejected and the session cleared.
///
/// The browser shell uses it to send the visitor to the login page.
pub type UnauthorizedHandler = Arc<dyn Fn() + Send + Sync>;

/// REST client that authenticates as the current session.
///
/// Each call reads the token at send time, so logins and logouts take effect
/// on the next request without rebuilding the client.
#[derive(Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    session: SessionManager<S>,
    on_unauthorized: Option<UnauthorizedHandler>,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(config: ApiConfig, session: SessionManager<S>) -> Self {
        Self::with_http_client(reqwest::Client::new(), config, session)
    }

    pub fn with_http_client(http: reqwest::Client, config: ApiConfig, session: SessionManager<S>) -> Self {
        Self {
            http,
            config,
            session,
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_handler(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(handler));
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let (req, bearer) = self.request(Method::GET, path);
        let response = self.execute(req, bearer).await?;
        decode(response).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let (req, bearer) = self.request(Method::GET, path);
        let response = self.execute(req.query(query), bearer).await?;
        decode(response).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (req, bearer) = self.request(Method::POST, path);
        let response = self.execute(req.json(body), bearer).await?;
        decode(response).await
    }

    /// POST without a body, ignoring the response body.
    pub async fn post_empty(&self, path: &str) -> ApiResult<()> {
        let (req, bearer) = self.request(Method::POST, path);
        self.execute(req, bearer).await?;
        Ok(())
    }

    /// POST whose response is a human-readable message.
    pub async fn post_message<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<String> {
        let (req, bearer) = self.request(Method::POST, path);
        let response = self.execute(req.json(body), bearer).await?;
        let text = response.text().await?;
        Ok(message_from_body(&text))
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (req, bearer) = self.request(Method::PUT, path);
        let response = self.execute(req.json(body), bearer).await?;
        decode(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let (req, bearer) = self.request(Method::DELETE, path);
        let response = self.execute(req, bearer).await?;
        decode(response).await
    }

    /// DELETE, ignoring the response body.
    pub async fn delete_empty(&self, path: &str) -> ApiResult<()> {
        let (req, bearer) = self.request(Method::DELETE, path);
        self.execute(req, bearer).await?;
        Ok(())
    }

    /// Build a request; the flag records whether a bearer token was attached.
    fn request(&self, method: Method, path: &str) -> (RequestBuilder, bool) {
        tracing::debug!(%method, path, "api request");

        let req = self
            .http
            .request(method, self.config.endpoint(path))
            .header(header::CONTENT_TYPE, "application/json");

        #[cfg(target_arch = "wasm32")]
        let req = req.fetch_credentials_include();

        match self.session.token() {
            Some(token) => (req.bearer_auth(token), true),
            None => (req, false),
        }
    }

    async fn execute(&self, req: RequestBuilder, sent_bearer: bool) -> ApiResult<Response> {
        let response = req.send().await.map_err(|err| {
            tracing::warn!(error = %err, "api request failed");
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && sent_bearer {
            tracing::warn!("bearer token rejected; signing out");
            self.session.clear_auth_session();
            if let Some(handler) = &self.on_unauthorized {
                handler();
            }
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), error = %err, "api request rejected");
        Err(err)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Backends answer message endpoints with a JSON string, a `{"message": ..}`
/// object, or plain text.
fn message_from_body(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct MessageBody {
        message: String,
    }

    if let Ok(text) = serde_json::from_str::<String>(body) {
        return text;
    }
    if let Ok(MessageBody { message }) = serde_json::from_str::<MessageBody>(body) {
        return message;
    }
    body.trim().to_string()
}
