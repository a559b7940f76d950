use booknest_auth::SessionStore;

use crate::dto::{ForgotPasswordInput, LoginInput, LoginResponse, RegisterInput, ResetPasswordInput};
use crate::{ApiClient, ApiResult};

pub async fn register<S: SessionStore>(api: &ApiClient<S>, input: &RegisterInput) -> ApiResult<String> {
    api.post_message("/register", input).await
}

/// Exchange credentials for a token. Does not touch the session; callers
/// decide when to persist it.
pub async fn login<S: SessionStore>(api: &ApiClient<S>, input: &LoginInput) -> ApiResult<LoginResponse> {
    api.post("/login", input).await
}

pub async fn forgot_password<S: SessionStore>(
    api: &ApiClient<S>,
    input: &ForgotPasswordInput,
) -> ApiResult<String> {
    api.post_message("/forgot-password", input).await
}

pub async fn reset_password_confirm<S: SessionStore>(
    api: &ApiClient<S>,
    input: &ResetPasswordInput,
) -> ApiResult<String> {
    api.post_message("/reset-password/confirm", input).await
}
