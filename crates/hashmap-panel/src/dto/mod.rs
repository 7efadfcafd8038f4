//! Data Transfer Objects (DTOs) for panel requests and responses

pub mod common;
pub mod page;

pub use common::*;
pub use page::*;
