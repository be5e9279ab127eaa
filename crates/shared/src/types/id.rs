//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `CompanyId` where an
//! `AccountId` is expected. Identifiers in the chart of accounts are
//! human-assigned strings (e.g. `"Cash - TC"`), not surrogate keys, so the
//! wrappers are string-backed.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an ID from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

typed_id!(
    AccountId,
    "Unique identifier for a chart of accounts entry."
);
typed_id!(CompanyId, "Unique identifier for a company.");
typed_id!(FiscalYearId, "Unique identifier for a fiscal year.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_from_str() {
        let id = AccountId::from("Cash - TC");
        assert_eq!(id.as_str(), "Cash - TC");
        assert_eq!(id.to_string(), "Cash - TC");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        let account = AccountId::new("1000");
        let company = CompanyId::new("1000");
        assert_eq!(account.as_str(), company.as_str());
    }

    #[test]
    fn test_into_inner_round_trip() {
        let id = FiscalYearId::new("2024");
        assert_eq!(id.clone().into_inner(), "2024".to_string());
        assert_eq!(FiscalYearId::from("2024".to_string()), id);
    }
}
