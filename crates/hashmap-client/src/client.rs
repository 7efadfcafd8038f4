//! Low level HTTP plumbing for the rating API

use hashmap_core::config::RatingApiConfig;
use hashmap_core::AppError;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use crate::types::ErrorBody;

/// Path of the hashmap module below the API root
pub const HASHMAP_PATH: &str = "/v1/rating/module_config/hashmap";

/// Client for the hashmap module of the rating API
#[derive(Debug, Clone)]
pub struct HashmapClient {
    http_client: Client,
    base_url: String,
    auth_token: Option<String>,
    timeout_ms: u64,
}

/// Rating API client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Timeout: request took longer than {0}ms")]
    Timeout(u64),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Connection(_) | ClientError::Timeout(_) => {
                AppError::RemoteConnection(err.to_string())
            }
            ClientError::MissingArgument(name) => AppError::MissingField(name.to_string()),
            ClientError::Config(msg) => AppError::Config(msg),
            ClientError::Http { .. } | ClientError::Parse(_) => AppError::Remote(err.to_string()),
        }
    }
}

impl HashmapClient {
    /// Creates a new client
    ///
    /// # Arguments
    ///
    /// * `api_url` - Root URL of the rating API (e.g. "http://127.0.0.1:8889")
    /// * `auth_token` - Token forwarded as `X-Auth-Token`
    /// * `timeout_ms` - Per request timeout in milliseconds
    pub fn new(
        api_url: &str,
        auth_token: Option<String>,
        timeout_ms: u64,
    ) -> Result<Self, ClientError> {
        let api_url = api_url.trim_end_matches('/');
        if api_url.is_empty() {
            return Err(ClientError::Config("rating API url is empty".to_string()));
        }

        let http_client = ClientBuilder::new()
            .timeout(Duration::from_millis(timeout_ms))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: format!("{}{}", api_url, HASHMAP_PATH),
            auth_token: auth_token.filter(|token| !token.is_empty()),
            timeout_ms,
        })
    }

    /// Creates a client from the `rating_api` configuration section
    pub fn from_config(config: &RatingApiConfig) -> Result<Self, ClientError> {
        Self::new(&config.url, config.auth_token.clone(), config.timeout_ms)
    }

    /// Base URL of the hashmap module
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a collection, e.g. `services`
    pub(crate) fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    /// URL of one resource; the id is percent-encoded as a path segment
    pub(crate) fn resource_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            collection,
            urlencoding::encode(id)
        )
    }

    /// Starts a request with the auth header applied
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        match &self.auth_token {
            Some(token) => builder.header("X-Auth-Token", token),
            None => builder,
        }
    }

    /// Sends a request and decodes the JSON body
    pub(crate) async fn send_json<R>(&self, builder: RequestBuilder) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let body = self.send(builder).await?;

        serde_json::from_str(&body).map_err(|e| {
            ClientError::Parse(format!("Failed to parse JSON: {} - Body: {}", e, body))
        })
    }

    /// Sends a request whose response body is irrelevant
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.send(builder).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String, ClientError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout_ms)
            } else {
                ClientError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ClientError::Parse(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            error!("Rating API HTTP error: status={}", status);
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        debug!("Rating API response: {}", body);
        Ok(body)
    }
}

/// Extracts the human readable part of an error body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            faultstring: Some(message),
            ..
        }) => message,
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ if body.trim().is_empty() => "empty response".to_string(),
        _ => body.trim().to_string(),
    }
}

/// Decodes a list reply that is either a bare array or wrapped under the
/// collection name
pub(crate) fn decode_list<T>(reply: Value, collection: &str) -> Result<Vec<T>, ClientError>
where
    T: DeserializeOwned,
{
    let items = match reply {
        Value::Array(_) => reply,
        Value::Object(mut object) => object.remove(collection).ok_or_else(|| {
            ClientError::Parse(format!("List reply has no '{}' key", collection))
        })?,
        other => {
            return Err(ClientError::Parse(format!(
                "Unexpected list reply for '{}': {}",
                collection, other
            )))
        }
    };

    serde_json::from_value(items).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmap_core::models::Service;
    use serde_json::json;

    fn client() -> HashmapClient {
        HashmapClient::new("http://localhost:8889/", None, 50).unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert_eq!(
            client().base_url(),
            "http://localhost:8889/v1/rating/module_config/hashmap"
        );
        assert!(HashmapClient::new("", None, 50).is_err());
    }

    #[test]
    fn test_empty_token_dropped() {
        let client = HashmapClient::new("http://localhost:8889", Some(String::new()), 50).unwrap();
        assert!(client.auth_token.is_none());
    }

    #[test]
    fn test_resource_url_encodes_id() {
        assert_eq!(
            client().resource_url("mappings", "a b/c"),
            "http://localhost:8889/v1/rating/module_config/hashmap/mappings/a%20b%2Fc"
        );
        assert_eq!(
            client().collection_url("fields"),
            "http://localhost:8889/v1/rating/module_config/hashmap/fields"
        );
    }

    #[test]
    fn test_decode_list_shapes() {
        let bare = json!([{"service_id": "s1", "name": "compute"}]);
        let wrapped = json!({"services": [{"service_id": "s1", "name": "compute"}]});

        let a: Vec<Service> = decode_list(bare, "services").unwrap();
        let b: Vec<Service> = decode_list(wrapped, "services").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].name, "compute");

        let missing: Result<Vec<Service>, _> = decode_list(json!({"fields": []}), "services");
        assert!(missing.is_err());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"faultstring": "No such service", "faultcode": "Client"}"#),
            "No such service"
        );
        assert_eq!(error_message("  "), "empty response");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_client_error_conversion() {
        let err: AppError = ClientError::Timeout(50).into();
        assert!(matches!(err, AppError::RemoteConnection(_)));

        let err: AppError = ClientError::Http {
            status: 404,
            message: "No such mapping".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Remote(_)));
        assert!(err.is_remote());
    }
}
