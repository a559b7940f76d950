use booknest_auth::SessionStore;
use booknest_core::{OrderId, PaymentMethod};

use crate::dto::{CheckoutInput, ConfirmPaymentInput, OrderView};
use crate::{ApiClient, ApiResult};

/// Turn the current cart into an order.
pub async fn checkout<S: SessionStore>(api: &ApiClient<S>, payment_method: PaymentMethod) -> ApiResult<OrderView> {
    api.post("/orders/checkout", &CheckoutInput { payment_method }).await
}

/// Report the outcome of a prepaid payment.
pub async fn confirm_payment<S: SessionStore>(
    api: &ApiClient<S>,
    order_id: &OrderId,
    success: bool,
) -> ApiResult<OrderView> {
    let body = ConfirmPaymentInput {
        order_id: order_id.clone(),
        success,
    };
    api.post("/orders/confirm", &body).await
}

pub async fn list_my_orders<S: SessionStore>(api: &ApiClient<S>) -> ApiResult<Vec<OrderView>> {
    api.get("/orders").await
}

/// Every customer's orders; the backend only serves this to admins.
pub async fn list_all_orders<S: SessionStore>(api: &ApiClient<S>) -> ApiResult<Vec<OrderView>> {
    api.get("/admin/orders").await
}
