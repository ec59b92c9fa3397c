/// Domain-specific error types for the marketplace client core.
///
/// Credit-flow errors are surfaced to callers for user-visible reporting.
/// Favorites and locale-resolution failures never reach this enum: those
/// paths log and fall back locally (unchanged set, fallback string).
#[derive(Debug, thiserror::Error)]
pub enum StayError {
    #[error("payment not completed: checkout session status is '{status}'")]
    PaymentNotCompleted { status: String },

    #[error("invalid checkout session metadata: {0}")]
    InvalidSessionMetadata(String),

    #[error("credit application failed: {0}")]
    CreditApplicationFailed(String),

    #[error("payment provider error: {0}")]
    Payment(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias.
pub type StayResult<T> = Result<T, StayError>;
