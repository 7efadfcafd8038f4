//! Rating API abstraction
//!
//! The dashboard never talks HTTP directly: forms, tables and tabs go through
//! `HashmapApi`, which the REST client implements.

use crate::models::{Field, Mapping, MappingArgs, Service};
use crate::AppResult;
use async_trait::async_trait;

/// Parent a mapping list is filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingParent<'a> {
    /// Mappings attached directly to a service
    Service(&'a str),
    /// Mappings attached to values of a field
    Field(&'a str),
}

impl MappingParent<'_> {
    /// Query parameter name and value for the list call
    pub fn as_query(&self) -> (&'static str, &str) {
        match self {
            MappingParent::Service(id) => ("service_id", *id),
            MappingParent::Field(id) => ("field_id", *id),
        }
    }
}

/// Hashmap module of the rating API
///
/// Every method is exactly one remote round trip.
#[async_trait]
pub trait HashmapApi: Send + Sync {
    // ==================== Services ====================

    /// List all services
    async fn list_services(&self) -> AppResult<Vec<Service>>;

    /// Fetch one service
    async fn get_service(&self, service_id: &str) -> AppResult<Service>;

    /// Create a service from its name
    async fn create_service(&self, name: &str) -> AppResult<Service>;

    /// Delete a service
    async fn delete_service(&self, service_id: &str) -> AppResult<()>;

    // ==================== Fields ====================

    /// List the fields of a service
    async fn list_fields(&self, service_id: &str) -> AppResult<Vec<Field>>;

    /// Fetch one field
    async fn get_field(&self, field_id: &str) -> AppResult<Field>;

    /// Create a field under a service
    async fn create_field(&self, name: &str, service_id: &str) -> AppResult<Field>;

    /// Delete a field
    async fn delete_field(&self, field_id: &str) -> AppResult<()>;

    // ==================== Mappings ====================

    /// List the mappings of a service or a field
    async fn list_mappings(&self, parent: MappingParent<'_>) -> AppResult<Vec<Mapping>>;

    /// Fetch one mapping
    async fn get_mapping(&self, mapping_id: &str) -> AppResult<Mapping>;

    /// Create a mapping; `args.mapping_id` is ignored
    async fn create_mapping(&self, args: &MappingArgs) -> AppResult<Mapping>;

    /// Update the mapping named by `args.mapping_id`
    async fn update_mapping(&self, args: &MappingArgs) -> AppResult<Mapping>;

    /// Delete a mapping
    async fn delete_mapping(&self, mapping_id: &str) -> AppResult<()>;
}
