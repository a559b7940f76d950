use booknest_auth::SessionStore;
use booknest_core::PublisherId;

use crate::dto::{ListPublishersParams, Publisher, PublisherInput};
use crate::{ApiClient, ApiResult};

/// Paging and search are passed through as query parameters.
pub async fn list_publishers<S: SessionStore>(
    api: &ApiClient<S>,
    params: &ListPublishersParams,
) -> ApiResult<Vec<Publisher>> {
    api.get_with_query("/publishers", params).await
}

pub async fn create_publisher<S: SessionStore>(
    api: &ApiClient<S>,
    input: &PublisherInput,
) -> ApiResult<Publisher> {
    api.post("/publishers", input).await
}

pub async fn update_publisher<S: SessionStore>(
    api: &ApiClient<S>,
    id: &PublisherId,
    input: &PublisherInput,
) -> ApiResult<Publisher> {
    api.put(&format!("/publishers/{id}"), input).await
}

pub async fn delete_publisher<S: SessionStore>(api: &ApiClient<S>, id: &PublisherId) -> ApiResult<()> {
    api.delete_empty(&format!("/publishers/{id}")).await
}
