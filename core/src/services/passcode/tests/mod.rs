//! Tests for the passcode services

#[cfg(test)]
mod mocks;
#[cfg(test)]
mod updater_tests;
