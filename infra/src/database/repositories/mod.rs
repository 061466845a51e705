//! Repository implementations backed by the store session

pub mod passcode_repository;
pub mod subject_repository;

pub use passcode_repository::MySqlPasscodeRepository;
pub use subject_repository::MySqlSubjectStore;
