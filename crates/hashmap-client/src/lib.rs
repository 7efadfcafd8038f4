//! Rating API hashmap client
//!
//! Typed REST client for `/v1/rating/module_config/hashmap`:
//! - services: list, get, create, delete
//! - fields: list by service, get, create, delete
//! - mappings: list by service or field, get, create, update, delete
//!
//! # Usage
//!
//! ```rust,ignore
//! use hashmap_client::HashmapClient;
//! use hashmap_core::HashmapApi;
//!
//! let client = HashmapClient::new("http://127.0.0.1:8889", None, 10_000)?;
//! let service = client.create_service("compute").await?;
//! let fields = client.list_fields(&service.service_id).await?;
//! ```

mod api;
mod client;
mod fields;
mod mappings;
mod services;
mod types;

pub use client::{ClientError, HashmapClient, HASHMAP_PATH};
