//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for external dependencies,
//! enabling unit testing without requiring a live backend, a payment
//! provider account, or the system clock.

pub mod backend;
pub mod payments;
pub mod time;

// Re-export all traits for crate-internal use.
// The public API surface is controlled by lib.rs re-exports.
pub use backend::MarketplaceStore;
pub use payments::{CheckoutSession, PaymentProvider, PaymentStatus};
pub use time::TimeProvider;

// Re-export default implementations
pub use time::SystemTimeProvider;
