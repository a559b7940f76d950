use booknest_auth::SessionStore;
use booknest_core::BookId;

use crate::dto::{CartItemInput, CartView};
use crate::{ApiClient, ApiError, ApiResult};

pub async fn get_cart<S: SessionStore>(api: &ApiClient<S>) -> ApiResult<CartView> {
    api.get("/cart").await
}

pub async fn add_to_cart<S: SessionStore>(api: &ApiClient<S>, book_id: &BookId, count: u32) -> ApiResult<CartView> {
    if count == 0 {
        return Err(ApiError::Invalid("quantity must be at least 1".into()));
    }
    let body = CartItemInput {
        book_id: book_id.clone(),
        count,
    };
    api.post("/cart/items", &body).await
}

/// Set the quantity of a line already in the cart.
pub async fn update_cart_item<S: SessionStore>(
    api: &ApiClient<S>,
    book_id: &BookId,
    count: u32,
) -> ApiResult<CartView> {
    let body = CartItemInput {
        book_id: book_id.clone(),
        count,
    };
    api.put("/cart/items", &body).await
}

pub async fn remove_cart_item<S: SessionStore>(api: &ApiClient<S>, book_id: &BookId) -> ApiResult<CartView> {
    api.delete(&format!("/cart/items/{book_id}")).await
}

pub async fn clear_cart<S: SessionStore>(api: &ApiClient<S>) -> ApiResult<()> {
    api.post_empty("/cart/clear").await
}
