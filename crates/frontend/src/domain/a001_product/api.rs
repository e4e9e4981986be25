//! Remote product gateway
//!
//! One network round trip per operation, no retries, no caching.

use crate::shared::api_utils::join_url;
use async_trait::async_trait;
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("HTTP {status}{}", status_suffix(.status_text))]
    Http { status: u16, status_text: String },

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn status_suffix(status_text: &str) -> String {
    if status_text.is_empty() {
        String::new()
    } else {
        format!(" {}", status_text)
    }
}

/// CRUD access to the product collection on the backend
#[async_trait(?Send)]
pub trait ProductGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;

    async fn create(&self, product: &ProductDto) -> Result<Product, GatewayError>;

    async fn update(&self, id: &ProductId, product: &ProductDto) -> Result<Product, GatewayError>;

    async fn delete(&self, id: &ProductId) -> Result<(), GatewayError>;
}

/// Gateway backed by the REST endpoints under `{base_url}/products`
#[derive(Debug, Clone)]
pub struct HttpProductGateway {
    base_url: String,
}

impl HttpProductGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        join_url(&self.base_url, "products")
    }

    fn item_url(&self, id: &ProductId) -> String {
        join_url(
            &self.base_url,
            &format!("products/{}", urlencoding::encode(id.value())),
        )
    }
}

fn ensure_success(response: &Response) -> Result<(), GatewayError> {
    if response.ok() {
        Ok(())
    } else {
        Err(GatewayError::Http {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    ensure_success(&response)?;
    let text = response
        .text()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ProductGateway for HttpProductGateway {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let response = Request::get(&self.collection_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn create(&self, product: &ProductDto) -> Result<Product, GatewayError> {
        let response = Request::post(&self.collection_url())
            .header("Accept", "application/json")
            .json(product)
            .map_err(|e| GatewayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn update(&self, id: &ProductId, product: &ProductDto) -> Result<Product, GatewayError> {
        let response = Request::put(&self.item_url(id))
            .header("Accept", "application/json")
            .json(product)
            .map_err(|e| GatewayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), GatewayError> {
        let response = Request::delete(&self.item_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        ensure_success(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let gateway = HttpProductGateway::new("http://127.0.0.1:3000/api/");
        assert_eq!(gateway.collection_url(), "http://127.0.0.1:3000/api/products");
        assert_eq!(
            gateway.item_url(&ProductId::new("42")),
            "http://127.0.0.1:3000/api/products/42"
        );
    }

    #[test]
    fn test_item_url_encodes_opaque_id() {
        let gateway = HttpProductGateway::new("/api");
        assert_eq!(
            gateway.item_url(&ProductId::new("a b/c")),
            "/api/products/a%20b%2Fc"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GatewayError::Http {
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");

        let err = GatewayError::Http {
            status: 500,
            status_text: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP 500");

        let err = GatewayError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Failed to send request: connection refused");
    }
}
