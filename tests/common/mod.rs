//! Shared test fixtures: an in-memory catalog backend over the trait seam.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use catalogist::catalog::{CatalogBackend, CatalogError, Product, ProductDraft};

/// Build a product fixture.
pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: format!("{title} description"),
        category: category.to_string(),
    }
}

/// How a scripted operation should fail.
#[derive(Clone, Copy, Debug)]
pub enum Failure {
    /// A catalog-level failure carrying transport detail (non-2xx status).
    Status(u16),
    /// An opaque failure with no catalog error in its chain.
    Opaque,
}

impl Failure {
    fn into_error(self, url: &str) -> anyhow::Error {
        match self {
            Failure::Status(status) => CatalogError::Status {
                status,
                url: url.to_string(),
            }
            .into(),
            Failure::Opaque => anyhow::anyhow!("network down"),
        }
    }
}

/// In-memory catalog backend with scriptable failures and call counters.
pub struct InMemoryBackend {
    products: Mutex<Vec<Product>>,
    list_failure: Mutex<Option<Failure>>,
    delete_failure: Mutex<Option<Failure>>,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
}

impl InMemoryBackend {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            list_failure: Mutex::new(None),
            delete_failure: Mutex::new(None),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_lists(&self, failure: Failure) {
        *self.list_failure.lock().unwrap() = Some(failure);
    }

    pub fn fail_deletes(&self, failure: Failure) {
        *self.delete_failure.lock().unwrap() = Some(failure);
    }

    pub fn clear_failures(&self) {
        *self.list_failure.lock().unwrap() = None;
        *self.delete_failure.lock().unwrap() = None;
    }

    pub fn remaining(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogBackend for InMemoryBackend {
    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = *self.list_failure.lock().unwrap() {
            return Err(failure.into_error("http://test/products"));
        }
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get_product(&self, id: u64) -> anyhow::Result<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| {
                CatalogError::Status {
                    status: 404,
                    url: format!("http://test/products/{id}"),
                }
                .into()
            })
    }

    async fn create_product(&self, draft: &ProductDraft) -> anyhow::Result<Product> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|product| product.id).max().unwrap_or(0) + 1;
        let created = Product {
            id,
            title: draft.title.clone(),
            price: draft.price,
            description: draft.description.clone(),
            category: draft.category.clone(),
        };
        products.push(created.clone());
        Ok(created)
    }

    async fn update_product(&self, id: u64, draft: &ProductDraft) -> anyhow::Result<Product> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.lock().unwrap();
        let Some(existing) = products.iter_mut().find(|product| product.id == id) else {
            return Err(CatalogError::Status {
                status: 404,
                url: format!("http://test/products/{id}"),
            }
            .into());
        };
        existing.title = draft.title.clone();
        existing.price = draft.price;
        existing.description = draft.description.clone();
        existing.category = draft.category.clone();
        Ok(existing.clone())
    }

    async fn delete_product(&self, id: u64) -> anyhow::Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = *self.delete_failure.lock().unwrap() {
            return Err(failure.into_error(&format!("http://test/products/{id}")));
        }
        self.products.lock().unwrap().retain(|product| product.id != id);
        Ok(())
    }
}
