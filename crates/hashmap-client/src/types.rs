//! Request and error bodies of the hashmap REST API

use serde::{Deserialize, Serialize};

/// Body of `POST /services`
#[derive(Debug, Serialize)]
pub struct CreateServiceBody<'a> {
    pub name: &'a str,
}

/// Body of `POST /fields`
#[derive(Debug, Serialize)]
pub struct CreateFieldBody<'a> {
    pub name: &'a str,
    pub service_id: &'a str,
}

/// Error body returned by the API on failure
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub faultstring: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
