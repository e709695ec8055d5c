// web_app/api/catalog.rs - Client for the external product catalog
//
// Passthrough calls to the dummyjson-style catalog API. Responses are read
// as text first so a malformed body is reported separately from a transport
// failure.

use std::sync::OnceLock;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::web_app::config::AppConfig;
use crate::web_app::error::AppError;
use crate::web_app::model::{categories_from_entries, CatalogPage, CategoryEntry, Product};

static CLIENT: OnceLock<CatalogClient> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    /// Fetch the catalog and normalize every record
    pub async fn fetch_products(&self) -> Result<Vec<Product>, AppError> {
        let page: CatalogPage = self.get_json(&self.products_url()).await?;
        Ok(page.into_products())
    }

    /// Fetch the category list, keeping only the first few entries
    pub async fn fetch_categories(&self) -> Result<Vec<String>, AppError> {
        let entries: Vec<CategoryEntry> = self.get_json(&self.categories_url()).await?;
        Ok(categories_from_entries(entries))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| AppError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Install the process-wide catalog client
pub fn init_client(client: CatalogClient) {
    if CLIENT.set(client).is_err() {
        tracing::warn!("Catalog client already initialized");
    }
}

/// The process-wide catalog client, built from the environment on first use
/// if `init_client` was never called.
pub fn client() -> &'static CatalogClient {
    CLIENT.get_or_init(|| CatalogClient::new(AppConfig::from_env().catalog_base_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_base() {
        let client = CatalogClient::new("https://dummyjson.com/");
        assert_eq!(client.base_url(), "https://dummyjson.com");
        assert_eq!(client.products_url(), "https://dummyjson.com/products");
        assert_eq!(
            client.categories_url(),
            "https://dummyjson.com/products/categories"
        );
    }

    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with a canned HTTP response, returning the base URL
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn test_client(base_url: String) -> CatalogClient {
        let http = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        CatalogClient::with_http(http, base_url)
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let base = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let client = test_client(base);

        let err = client.fetch_products().await.unwrap_err();
        match err {
            AppError::UpstreamStatus { url, status } => {
                assert_eq!(status, 503);
                assert_eq!(url, client.products_url());
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 12\r\nConnection: close\r\n\r\n{\"items\":[]}",
        )
        .await;
        let client = test_client(base);

        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_categories_served_locally() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 33\r\nConnection: close\r\n\r\n[\"beauty\",\"fragrances\",\"laptops\"]",
        )
        .await;
        let client = test_client(base);

        let categories = client.fetch_categories().await.unwrap();
        assert_eq!(categories, vec!["beauty", "fragrances", "laptops"]);
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_http_error() {
        // Nothing listens on the local discard port.
        let client = CatalogClient::new("http://127.0.0.1:9");
        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }
}
