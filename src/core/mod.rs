//! Core business logic, framework-agnostic.
//!
//! The checkout transactor is the heart of the crate; the other modules are
//! the inventory, season, user, and session operations the calling layer
//! wires to its routes.

/// Cart checkout - the atomic validate/record/decrement transaction
pub mod checkout;
/// Product inventory CRUD and catalog queries
pub mod product;
/// Season management and activation
pub mod season;
/// Session registry enforcing one active session per user
pub mod session;
/// User registration, authentication, and profiles
pub mod user;
