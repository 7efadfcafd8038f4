//! Hashmap Dashboard Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the hashmap rating dashboard. It includes:
//!
//! - Domain models (Service, Field, Mapping) as returned by the rating API
//! - The `HashmapApi` trait every rating API client implements
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;
pub use traits::HashmapApi;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
