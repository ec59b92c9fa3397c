//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions
//! that allow unit testing without a live backend or payment provider.

pub mod backend;
pub mod payments;
pub mod time;

pub use backend::{MockBackend, MockBackendFailure, RecordedCreditCall};
pub use payments::MockPayments;
pub use time::MockTime;
