//! Application state and business logic

use std::sync::Arc;

use ratatui::widgets::TableState;

use crate::catalog::{CatalogBackend, Product, ProductDraft};
use crate::constants::{
    ERROR_PRODUCT_CREATE_FAILED, ERROR_PRODUCT_DELETE_FAILED, ERROR_PRODUCT_UPDATE_FAILED,
    SUCCESS_PRODUCT_CREATED, SUCCESS_PRODUCT_DELETED, SUCCESS_PRODUCT_UPDATED,
};
use crate::controller::ProductController;
use crate::notifications::Notifier;
use crate::validation::{check_category, check_description, check_title, Violation};

/// A sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Price,
    Category,
}

/// Direction of the active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Which product form is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: u64 },
}

/// Input field focus inside the product form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Price,
    Description,
    Category,
}

/// State of the create/edit product form dialog
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub mode: FormMode,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub focused: FormField,
    pub violations: Vec<Violation>,
}

impl ProductForm {
    /// Empty form for creating a product
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            price: String::new(),
            description: String::new(),
            category: String::new(),
            focused: FormField::Title,
            violations: Vec::new(),
        }
    }

    /// Form prefilled from an existing product
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit { id: product.id },
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            focused: FormField::Title,
            violations: Vec::new(),
        }
    }

    /// The input buffer of the focused field
    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Title => &mut self.title,
            FormField::Price => &mut self.price,
            FormField::Description => &mut self.description,
            FormField::Category => &mut self.category,
        }
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            FormField::Title => FormField::Price,
            FormField::Price => FormField::Description,
            FormField::Description => FormField::Category,
            FormField::Category => FormField::Title,
        };
    }

    /// Move focus to the previous field
    pub fn focus_previous(&mut self) {
        self.focused = match self.focused {
            FormField::Title => FormField::Category,
            FormField::Price => FormField::Title,
            FormField::Description => FormField::Price,
            FormField::Category => FormField::Description,
        };
    }

    /// Turn the form inputs into a validated draft payload.
    ///
    /// The price input is free text; a value that does not parse as a number
    /// is reported through the same violation channel as the schema rules.
    pub fn to_draft(&self) -> Result<ProductDraft, Vec<Violation>> {
        match self.price.trim().parse::<f64>() {
            Ok(price) => {
                let draft = ProductDraft {
                    title: self.title.clone(),
                    price,
                    description: self.description.clone(),
                    category: self.category.clone(),
                };
                match draft.validate() {
                    Ok(()) => Ok(draft),
                    Err(errors) => Err(errors.violations),
                }
            }
            Err(_) => {
                let violations: Vec<Violation> = [
                    check_title(&self.title),
                    Some(Violation::new("price", "Price must be a number")),
                    check_description(&self.description),
                    check_category(&self.category),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(violations)
            }
        }
    }
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub controller: ProductController,
    pub notifier: Notifier,
    pub selected_index: usize,
    pub table_state: TableState,
    pub sort: Option<(SortColumn, SortDirection)>,
    pub form: Option<ProductForm>,
    catalog: Arc<dyn CatalogBackend>,
}

impl App {
    /// Create a new App instance over the given catalog backend
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogBackend>, notifier: Notifier) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            should_quit: false,
            controller: ProductController::new(catalog.clone()),
            notifier,
            selected_index: 0,
            table_state,
            sort: None,
            form: None,
            catalog,
        }
    }

    /// The product list in display order: the active column sort applied on
    /// top of the controller's server-order list, which is never mutated.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.controller.products().iter().collect();

        if let Some((column, direction)) = self.sort {
            products.sort_by(|a, b| {
                let ordering = match column {
                    SortColumn::Title => a.title.cmp(&b.title),
                    SortColumn::Price => a.price.total_cmp(&b.price),
                    SortColumn::Category => a.category.cmp(&b.category),
                };
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        products
    }

    /// The product under the cursor, if any
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.visible_products().get(self.selected_index).copied()
    }

    /// Toggle sorting on a column: activating flips an active column's
    /// direction, switching columns starts ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Move the cursor to the next product, wrapping around
    pub fn next_product(&mut self) {
        let len = self.controller.products().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
            self.table_state.select(Some(self.selected_index));
        }
    }

    /// Move the cursor to the previous product, wrapping around
    pub fn previous_product(&mut self) {
        let len = self.controller.products().len();
        if len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
            self.table_state.select(Some(self.selected_index));
        }
    }

    /// Keep the cursor inside the list after the list shrinks
    fn clamp_selection(&mut self) {
        let len = self.controller.products().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    /// Reload the product list from the catalog
    pub async fn refresh(&mut self) {
        self.controller.fetch_products().await;
        self.clamp_selection();
    }

    /// Select the highlighted product for deletion (first phase)
    pub fn request_delete_selected(&mut self) {
        if let Some(product) = self.selected_product().cloned() {
            self.controller.confirm_delete(product);
        }
    }

    /// Run the confirmed delete (second phase) and toast the outcome.
    ///
    /// A successful delete clears the pending selection, so the selection
    /// surviving the call is the failure signal; the selection is kept by the
    /// controller in that case so the delete can be retried.
    pub async fn confirm_pending_delete(&mut self) {
        let Some(pending_id) = self.controller.pending_delete().map(|product| product.id) else {
            return;
        };

        self.controller.delete_product(pending_id).await;

        if self.controller.pending_delete().is_none() {
            self.notifier.show_success(SUCCESS_PRODUCT_DELETED);
        } else {
            let detail = self
                .controller
                .error()
                .map_or_else(|| ERROR_PRODUCT_DELETE_FAILED.to_string(), ToString::to_string);
            self.notifier.show_error(format!("{ERROR_PRODUCT_DELETE_FAILED}: {detail}"));
        }
        self.clamp_selection();
    }

    /// Dismiss the delete confirmation (second phase, declined)
    pub fn cancel_pending_delete(&mut self) {
        self.controller.cancel_delete();
    }

    /// Open an empty product form
    pub fn start_create_form(&mut self) {
        self.form = Some(ProductForm::create());
    }

    /// Open the form prefilled from the highlighted product
    pub fn start_edit_form(&mut self) {
        if let Some(product) = self.selected_product().cloned() {
            self.form = Some(ProductForm::edit(&product));
        }
    }

    /// Close the form without submitting
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Validate and submit the open form.
    ///
    /// Violations keep the form open with the failures listed; a valid draft
    /// is submitted to the catalog, the list is refreshed, and the outcome is
    /// toasted.
    pub async fn submit_form(&mut self) {
        let Some(mut form) = self.form.take() else {
            return;
        };

        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(violations) => {
                form.violations = violations;
                self.form = Some(form);
                return;
            }
        };

        let (result, success_message, failure_message) = match form.mode {
            FormMode::Create => (
                self.catalog.create_product(&draft).await.map(|_| ()),
                SUCCESS_PRODUCT_CREATED,
                ERROR_PRODUCT_CREATE_FAILED,
            ),
            FormMode::Edit { id } => (
                self.catalog.update_product(id, &draft).await.map(|_| ()),
                SUCCESS_PRODUCT_UPDATED,
                ERROR_PRODUCT_UPDATE_FAILED,
            ),
        };

        match result {
            Ok(()) => {
                self.notifier.show_success(success_message);
                self.refresh().await;
            }
            Err(err) => {
                log::error!("product submission failed: {err:#}");
                self.notifier.show_error(format!("{failure_message}: {err}"));
            }
        }
    }
}
