pub mod passcode;
pub mod subject;

pub use passcode::{MockPasscodeRepository, PasscodeRepository};
pub use subject::{ContactChannel, MockSubjectStore, SubjectPartition, SubjectStore};
