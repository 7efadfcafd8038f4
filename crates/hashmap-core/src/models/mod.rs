//! Domain models for the hashmap rating module
//!
//! All entities are owned by the remote rating API; these are the shapes its
//! responses are decoded into.

pub mod field;
pub mod mapping;
pub mod service;

pub use field::Field;
pub use mapping::{Mapping, MappingArgs, MappingType};
pub use service::Service;

/// Uniform row identity for entities shown in tables
///
/// Each entity carries its own `*_id` attribute; tables and batch actions
/// only ever need a single opaque id.
pub trait Identify {
    /// Identifier used as table row key and batch action object id
    fn id(&self) -> &str;
}
