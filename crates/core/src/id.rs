//! Strongly-typed identifiers for catalog, cart and order resources.
//!
//! The backend owns identifier generation; the client treats ids as opaque
//! strings and only refuses empty ones.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! string_id {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

string_id!(
    /// Identifier of a book in the catalog.
    BookId,
    "BookId"
);
string_id!(
    /// Identifier of an author.
    AuthorId,
    "AuthorId"
);
string_id!(
    /// Identifier of a publisher.
    PublisherId,
    "PublisherId"
);
string_id!(CategoryId, "CategoryId");
string_id!(OrderId, "OrderId");
string_id!(CartId, "CartId");
string_id!(
    /// Identifier of a customer or admin account.
    UserId,
    "UserId"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ids_are_rejected() {
        assert!(matches!(BookId::new(""), Err(DomainError::InvalidId(_))));
        assert!(matches!("   ".parse::<OrderId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id: BookId = "b-42".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"b-42\"");

        let back: BookId = serde_json::from_str("\"b-42\"").unwrap();
        assert_eq!(back, id);
        assert_eq!(back.to_string(), "b-42");
    }
}
