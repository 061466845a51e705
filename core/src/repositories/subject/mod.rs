//! Subject store module.

mod r#trait;
pub use r#trait::{ContactChannel, SubjectPartition, SubjectStore};

mod mock;
pub use mock::{MockSubjectRow, MockSubjectStore};

#[cfg(test)]
mod tests;
