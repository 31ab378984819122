//! PostgreSQL repository implementations.
//!
//! - [`PgMappingRepository`] - Mapping storage and retrieval

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
