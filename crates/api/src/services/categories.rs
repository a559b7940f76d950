use booknest_auth::SessionStore;
use booknest_core::CategoryId;

use crate::dto::{Category, CategoryInput};
use crate::{ApiClient, ApiResult};

pub async fn list_categories<S: SessionStore>(api: &ApiClient<S>) -> ApiResult<Vec<Category>> {
    api.get("/categories").await
}

pub async fn create_category<S: SessionStore>(
    api: &ApiClient<S>,
    input: &CategoryInput,
) -> ApiResult<Category> {
    api.post("/categories", input).await
}

pub async fn update_category<S: SessionStore>(
    api: &ApiClient<S>,
    id: &CategoryId,
    input: &CategoryInput,
) -> ApiResult<Category> {
    api.put(&format!("/categories/{id}"), input).await
}

pub async fn delete_category<S: SessionStore>(api: &ApiClient<S>, id: &CategoryId) -> ApiResult<()> {
    api.delete_empty(&format!("/categories/{id}")).await
}
