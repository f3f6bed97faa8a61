//! Product controller owning the list state and the fetch/delete flows.
//!
//! The controller is the data layer behind the product table: it holds the
//! in-memory product list, the in-flight flags the UI renders from, the last
//! captured failure, and the pending-delete selection for the two-phase
//! delete flow. Operations never propagate errors to the caller; the only
//! observable effects are the state fields the consuming UI polls.

use std::sync::Arc;

use crate::catalog::{CatalogBackend, CatalogError, Product};

/// Failure kinds captured at the controller boundary.
///
/// Catalog failures keep their message; anything else collapses into
/// [`ControllerError::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("{message}")]
    Transport { message: String },

    #[error("An unknown error occurred")]
    Unknown,
}

impl ControllerError {
    /// Normalize an operation failure into the closed error set.
    fn normalize(err: &anyhow::Error) -> Self {
        if err.chain().any(|cause| cause.is::<CatalogError>()) {
            Self::Transport {
                message: err.to_string(),
            }
        } else {
            Self::Unknown
        }
    }
}

/// Stateful orchestrator between the catalog backend and the UI.
///
/// One instance per UI surface; state is created fresh at construction and
/// mutated only by the controller's own methods. The UI reads it back through
/// the accessors each frame.
pub struct ProductController {
    backend: Arc<dyn CatalogBackend>,
    products: Vec<Product>,
    is_loading: bool,
    is_deleting: bool,
    error: Option<ControllerError>,
    pending_delete: Option<Product>,
}

impl ProductController {
    /// Create a controller over the given catalog backend.
    #[must_use]
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self {
            backend,
            products: Vec::new(),
            is_loading: false,
            is_deleting: false,
            error: None,
            pending_delete: None,
        }
    }

    /// The product list, in server response order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// True only while a list fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True only while a delete is in flight.
    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    /// The last captured failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ControllerError> {
        self.error.as_ref()
    }

    /// The product currently awaiting delete confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&Product> {
        self.pending_delete.as_ref()
    }

    /// Replace the product list wholesale from the catalog.
    ///
    /// Overlapping fetches are rejected: a call while one is already in
    /// flight returns without contacting the API. On failure the previous
    /// list is kept (stale but valid) and the error is captured into state.
    pub async fn fetch_products(&mut self) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;

        match self.backend.list_products().await {
            Ok(products) => {
                self.products = products;
            }
            Err(err) => {
                self.error = Some(ControllerError::normalize(&err));
            }
        }

        self.is_loading = false;
    }

    /// Select a product for deletion. Repeatable to change the selection.
    pub fn confirm_delete(&mut self, product: Product) {
        self.pending_delete = Some(product);
    }

    /// Clear the pending-delete selection. No-op when nothing is selected.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the currently selected product.
    ///
    /// The `id` argument is accepted for interface compatibility but the
    /// deletion target is the pending-delete selection; a disagreement
    /// between the two is logged. Without a selection the call is a no-op
    /// and the API is never contacted. On failure the selection stays set so
    /// the delete can be retried.
    pub async fn delete_product(&mut self, id: u64) {
        let Some(pending) = self.pending_delete.clone() else {
            return;
        };
        if self.is_deleting {
            return;
        }
        if pending.id != id {
            log::warn!(
                "delete requested for product {id} but selection is {}; deleting the selection",
                pending.id
            );
        }

        self.is_deleting = true;

        match self.backend.delete_product(pending.id).await {
            Ok(()) => {
                self.products.retain(|product| product.id != pending.id);
                self.pending_delete = None;
            }
            Err(err) => {
                self.error = Some(ControllerError::normalize(&err));
            }
        }

        self.is_deleting = false;
    }
}
