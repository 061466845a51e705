//! Business services containing domain logic and use cases.

pub mod passcode;

// Re-export commonly used types
pub use passcode::{
    DeliveryDispatcher, DeliveryReceipt, DeliveryStatus, IssueOutcome, MetricsSink,
    PasscodeConfig, PasscodeIssuer, PasscodeVerifier, SubjectVerificationUpdater,
};
