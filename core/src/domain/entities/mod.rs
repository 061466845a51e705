//! Domain entities representing core business objects.

pub mod passcode;
pub mod subject;

// Re-export commonly used types
pub use passcode::{PasscodeRecord, Purpose};
pub use subject::SubjectId;
