use booknest_auth::SessionStore;
use booknest_core::BookId;

use crate::dto::{Book, BookInput};
use crate::{ApiClient, ApiResult};

pub async fn list_books<S: SessionStore>(api: &ApiClient<S>) -> ApiResult<Vec<Book>> {
    api.get("/books").await
}

pub async fn get_book<S: SessionStore>(api: &ApiClient<S>, id: &BookId) -> ApiResult<Book> {
    api.get(&format!("/books/{id}")).await
}

pub async fn create_book<S: SessionStore>(api: &ApiClient<S>, input: &BookInput) -> ApiResult<Book> {
    api.post("/books", input).await
}

pub async fn update_book<S: SessionStore>(
    api: &ApiClient<S>,
    id: &BookId,
    input: &BookInput,
) -> ApiResult<Book> {
    api.put(&format!("/books/{id}"), input).await
}

pub async fn delete_book<S: SessionStore>(api: &ApiClient<S>, id: &BookId) -> ApiResult<()> {
    api.delete_empty(&format!("/books/{id}")).await
}
