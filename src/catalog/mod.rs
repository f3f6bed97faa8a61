//! Catalog abstraction layer for the product catalog API.
//!
//! This module defines the wire model shared across the application, the
//! error type surfaced by catalog operations, and the common interface that
//! catalog backends implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod fakestore;

pub use fakestore::FakeStoreBackend;

/// Error type for catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status {status}: {url}")]
    Status { status: u16, url: String },
}

/// A catalog item as returned by the remote API.
///
/// The remote may attach extra fields (image URL, rating); those are ignored
/// on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

/// Payload for creating or replacing a product.
///
/// Untyped at the catalog layer beyond its shape; callers run it through
/// [`crate::validation`] before submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

impl ProductDraft {
    /// Build an edit payload prefilled from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
        }
    }
}

/// Backend trait that all product catalog backends implement.
///
/// This is the seam between the application and the remote catalog service;
/// tests substitute an in-memory implementation.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Fetch the full product collection, in server order.
    async fn list_products(&self) -> anyhow::Result<Vec<Product>>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: u64) -> anyhow::Result<Product>;

    /// Create a product from a draft payload.
    async fn create_product(&self, draft: &ProductDraft) -> anyhow::Result<Product>;

    /// Replace a product wholesale.
    async fn update_product(&self, id: u64, draft: &ProductDraft) -> anyhow::Result<Product>;

    /// Delete a product by id.
    async fn delete_product(&self, id: u64) -> anyhow::Result<()>;
}
