//! `booknest-core`: shared storefront vocabulary.
//!
//! Plain domain types used by the API client and the storefront shell. No IO.

pub mod error;
pub mod id;
pub mod money;
pub mod status;

pub use error::{DomainError, DomainResult};
pub use id::{AuthorId, BookId, CartId, CategoryId, OrderId, PublisherId, UserId};
pub use money::format_price;
pub use status::{OrderStatus, PaymentMethod, PaymentStatus};
