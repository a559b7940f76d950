use booknest_auth::SessionStore;
use booknest_core::AuthorId;

use crate::dto::{Author, AuthorInput};
use crate::{ApiClient, ApiResult};

pub async fn list_authors<S: SessionStore>(api: &ApiClient<S>) -> ApiResult<Vec<Author>> {
    api.get("/authors").await
}

pub async fn create_author<S: SessionStore>(api: &ApiClient<S>, input: &AuthorInput) -> ApiResult<Author> {
    api.post("/authors", input).await
}

pub async fn update_author<S: SessionStore>(
    api: &ApiClient<S>,
    id: &AuthorId,
    input: &AuthorInput,
) -> ApiResult<Author> {
    api.put(&format!("/authors/{id}"), input).await
}

pub async fn delete_author<S: SessionStore>(api: &ApiClient<S>, id: &AuthorId) -> ApiResult<()> {
    api.delete_empty(&format!("/authors/{id}")).await
}
