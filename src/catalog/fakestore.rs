//! Fake Store API backend implementation.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use super::{CatalogBackend, CatalogError, Product, ProductDraft};

/// Catalog backend backed by the Fake Store REST API.
///
/// A deliberately thin client: one HTTP call per operation, no retry, no
/// request timeout, no authentication. Failures propagate to callers as
/// [`CatalogError`] values unchanged.
pub struct FakeStoreBackend {
    client: reqwest::Client,
    base_url: String,
}

impl FakeStoreBackend {
    /// Create a new backend against the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the product collection.
    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// URL of a single product.
    fn product_url(&self, id: u64) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    /// Reject non-2xx responses, passing successful ones through.
    fn check_status(response: Response) -> Result<Response, CatalogError> {
        let status: StatusCode = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(CatalogError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl CatalogBackend for FakeStoreBackend {
    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        let url = self.products_url();
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await.map_err(CatalogError::Network)?;
        let products = Self::check_status(response)?
            .json::<Vec<Product>>()
            .await
            .map_err(CatalogError::Network)?;
        Ok(products)
    }

    async fn get_product(&self, id: u64) -> anyhow::Result<Product> {
        let url = self.product_url(id);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await.map_err(CatalogError::Network)?;
        let product = Self::check_status(response)?
            .json::<Product>()
            .await
            .map_err(CatalogError::Network)?;
        Ok(product)
    }

    async fn create_product(&self, draft: &ProductDraft) -> anyhow::Result<Product> {
        let url = self.products_url();
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(CatalogError::Network)?;
        let product = Self::check_status(response)?
            .json::<Product>()
            .await
            .map_err(CatalogError::Network)?;
        Ok(product)
    }

    async fn update_product(&self, id: u64, draft: &ProductDraft) -> anyhow::Result<Product> {
        let url = self.product_url(id);
        log::debug!("PUT {url}");
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(CatalogError::Network)?;
        let product = Self::check_status(response)?
            .json::<Product>()
            .await
            .map_err(CatalogError::Network)?;
        Ok(product)
    }

    async fn delete_product(&self, id: u64) -> anyhow::Result<()> {
        let url = self.product_url(id);
        log::debug!("DELETE {url}");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(CatalogError::Network)?;
        Self::check_status(response)?;
        Ok(())
    }
}
