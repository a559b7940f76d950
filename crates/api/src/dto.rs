//! Request and response payloads, field-for-field with the backend JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use booknest_core::{
    AuthorId, BookId, CartId, CategoryId, DomainError, DomainResult, OrderId, OrderStatus,
    PaymentMethod, PaymentStatus, PublisherId, UserId,
};

// -------------------------
// Auth
// -------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RegisterInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterInput {
    /// Trims names and email; the password is sent as typed.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self
    }

    pub fn validate(&self, confirm_password: &str) -> DomainResult<()> {
        if self.password != confirm_password {
            return Err(DomainError::validation("Passwords do not match"));
        }
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordInput {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl ForgotPasswordInput {
    pub fn validate(&self) -> DomainResult<()> {
        validate_email(&self.email)
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordInput {
    pub token: String,
    pub new_password: String,
}

impl ResetPasswordInput {
    pub fn validate(&self, confirm_password: &str) -> DomainResult<()> {
        if self.token.trim().is_empty() {
            return Err(DomainError::validation(
                "Reset token is missing. Request a new reset link.",
            ));
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.new_password != confirm_password {
            return Err(DomainError::validation("Passwords do not match"));
        }
        Ok(())
    }
}

/// Loose shape check: `local@domain.tld`, no whitespace in any part.
fn validate_email(email: &str) -> DomainResult<()> {
    let invalid = || DomainError::validation("Please enter a valid email address");

    let (local, domain) = email.trim().split_once('@').ok_or_else(invalid)?;
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    let bad = |part: &str| part.is_empty() || part.chars().any(char::is_whitespace);
    if bad(local) || bad(host) || bad(tld) {
        return Err(invalid());
    }
    Ok(())
}

// -------------------------
// Catalog
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCategory {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub author_name: String,
    pub author_id: AuthorId,
    pub available_stock: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub description: String,
    #[serde(default)]
    pub isbn: Option<String>,
    pub price: f64,
    pub discount_percentage: f64,
    pub publisher_id: PublisherId,
    #[serde(default)]
    pub categories: Vec<BookCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Price after the book's discount.
    pub fn discounted_price(&self) -> f64 {
        let pct = self.discount_percentage.clamp(0.0, 100.0);
        self.price * (100.0 - pct) / 100.0
    }

    pub fn in_stock(&self) -> bool {
        self.is_active && self.available_stock > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookInput {
    pub name: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<AuthorId>,
    pub available_stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    pub price: f64,
    pub discount_percentage: f64,
    pub publisher_id: PublisherId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<CategoryId>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: PublisherId,
    pub legal_name: String,
    pub trading_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublisherInput {
    pub legal_name: String,
    pub trading_name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPublishersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInput {
    pub name: String,
}

// -------------------------
// Cart
// -------------------------

/// A priced line; carts and orders share the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub book_id: BookId,
    pub name: String,
    pub author_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub unit_price: f64,
    pub count: u32,
    pub line_total: f64,
}

pub type CartItem = LineItem;
pub type OrderItem = LineItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub cart_id: CartId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub total_items: u32,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemInput {
    pub book_id: BookId,
    pub count: u32,
}

// -------------------------
// Orders
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCore {
    pub id: OrderId,
    pub order_number: String,
    pub total_price: f64,
    pub user_id: UserId,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub order: OrderCore,
    pub items: Vec<OrderItem>,
}

impl OrderView {
    /// Prepaid orders stay pending until their payment is confirmed.
    pub fn awaiting_payment(&self) -> bool {
        self.order.status == OrderStatus::Pending
            && self.order.payment_method.is_some_and(|m| m.is_prepaid())
            && matches!(self.order.payment_status, None | Some(PaymentStatus::Pending))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutInput {
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPaymentInput {
    pub order_id: OrderId,
    pub success: bool,
}
