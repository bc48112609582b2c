//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod click_repository;

pub use click_repository::ClickRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
