//! Application services.
//!
//! - [`ShortenerService`] - identifier allocation, resolution, and history

pub mod shortener_service;

pub use shortener_service::ShortenerService;
