//! Passcode repository module.

mod r#trait;
pub use r#trait::PasscodeRepository;

mod mock;
pub use mock::MockPasscodeRepository;

#[cfg(test)]
mod tests;
