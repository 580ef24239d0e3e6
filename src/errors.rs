//! Unified error types for the bakery backend.
//!
//! Business-rule violations (empty cart, unknown product, insufficient stock,
//! bad credentials) carry enough structure for the calling layer to render a
//! useful message and map to a 400-class response. Infrastructure failures
//! (`Database`, `Config`) map to a 500-class response and are never shown to
//! the user verbatim.

use thiserror::Error;

/// All errors produced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Checkout was called with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line requested a non-positive quantity.
    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity {
        /// Product the bad line referenced
        product_id: i64,
        /// The rejected quantity
        quantity: i32,
    },

    /// A referenced product does not exist (stale client cart).
    #[error("Product {product_id} not found")]
    ProductNotFound {
        /// The missing product id
        product_id: i64,
    },

    /// Authoritative stock is lower than the requested quantity.
    #[error("Not enough stock of {name}. Available: {available}, requested: {requested}")]
    InsufficientStock {
        /// Product that ran short
        product_id: i64,
        /// Product name, for user display
        name: String,
        /// Stock available at validation time
        available: i32,
        /// Quantity the cart asked for
        requested: i32,
    },

    /// A price, allocation, or stock value failed validation.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// A referenced season does not exist.
    #[error("Season {season_id} not found")]
    SeasonNotFound {
        /// The missing season id
        season_id: i64,
    },

    /// A referenced user does not exist.
    #[error("User {user_id} not found")]
    UserNotFound {
        /// The missing user id
        user_id: i64,
    },

    /// Registration attempted with an email that is already taken.
    #[error("Email {email} is already registered")]
    EmailTaken {
        /// The duplicate email
        email: String,
    },

    /// Login failed: no user matches the email/password pair.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The user already holds an active session on another device.
    #[error("User {user_id} already has an active session")]
    SessionActive {
        /// The user that is already logged in
        user_id: i64,
    },

    /// Input validation failure with a human-readable reason.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Configuration loading or parsing failure.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Underlying database failure (connection loss, deadlock, timeout).
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl Error {
    /// Whether this error is the caller's fault (400-class at the boundary)
    /// rather than an infrastructure failure (500-class).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Database(_) | Self::Config { .. })
    }

    /// Message suitable for direct display to an end user.
    ///
    /// Business-rule errors are surfaced verbatim; store failures are
    /// replaced with a generic retry prompt so internal error text never
    /// leaks to clients.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            "Something went wrong, please try again.".to_string()
        }
    }
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_errors_are_client_errors() {
        assert!(Error::EmptyCart.is_client_error());
        assert!(
            Error::InsufficientStock {
                product_id: 7,
                name: "Concha".to_string(),
                available: 2,
                requested: 3,
            }
            .is_client_error()
        );
        assert!(Error::InvalidCredentials.is_client_error());
    }

    #[test]
    fn test_database_errors_are_not_client_errors() {
        let err = Error::Database(sea_orm::DbErr::Custom("connection reset".to_string()));
        assert!(!err.is_client_error());
        assert_eq!(err.user_message(), "Something went wrong, please try again.");
        // The underlying store text must not leak through
        assert!(!err.user_message().contains("connection reset"));
    }

    #[test]
    fn test_insufficient_stock_message_includes_availability() {
        let err = Error::InsufficientStock {
            product_id: 7,
            name: "Concha".to_string(),
            available: 2,
            requested: 3,
        };
        let msg = err.user_message();
        assert!(msg.contains("Concha"));
        assert!(msg.contains('2'));
        assert!(msg.contains('3'));
    }
}
