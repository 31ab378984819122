//! Repository trait definitions for the domain layer.
//!
//! The trait defines the contract for the durable identifier store;
//! the concrete implementation lives in
//! `crate::infrastructure::persistence`. A mock implementation is
//! auto-generated via `mockall` for unit tests.

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
