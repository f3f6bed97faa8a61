//! Validation rules for product create/edit payloads.
//!
//! The form layer runs a draft through [`ProductDraft::validate`] before
//! submitting it to the catalog. Validation either accepts the payload or
//! produces a structured list of field-level violations.

use std::fmt;

use crate::catalog::ProductDraft;
use crate::constants::{MIN_PRICE, TITLE_MAX_LEN};

/// A single field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The full set of violations for a rejected payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a product title: required, at most [`TITLE_MAX_LEN`] characters.
#[must_use]
pub fn check_title(title: &str) -> Option<Violation> {
    if title.is_empty() {
        Some(Violation::new("title", "Title is required"))
    } else if title.chars().count() > TITLE_MAX_LEN {
        Some(Violation::new(
            "title",
            format!("Title must be at most {TITLE_MAX_LEN} characters"),
        ))
    } else {
        None
    }
}

/// Check a product price: a finite number, non-negative, at least [`MIN_PRICE`].
#[must_use]
pub fn check_price(price: f64) -> Option<Violation> {
    if !price.is_finite() {
        Some(Violation::new("price", "Price must be a number"))
    } else if price < 0.0 {
        Some(Violation::new("price", "Price cannot be negative"))
    } else if price < MIN_PRICE {
        Some(Violation::new("price", "Price must be greater than 0"))
    } else {
        None
    }
}

/// Check a product description: required.
#[must_use]
pub fn check_description(description: &str) -> Option<Violation> {
    if description.is_empty() {
        Some(Violation::new("description", "Description is required"))
    } else {
        None
    }
}

/// Check a product category: required.
#[must_use]
pub fn check_category(category: &str) -> Option<Violation> {
    if category.is_empty() {
        Some(Violation::new("category", "Category is required"))
    } else {
        None
    }
}

impl ProductDraft {
    /// Validate the draft against the catalog's payload rules.
    ///
    /// # Errors
    /// Returns every violated rule, in field order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let violations: Vec<Violation> = [
            check_title(&self.title),
            check_price(self.price),
            check_description(&self.description),
            check_category(&self.category),
        ]
        .into_iter()
        .flatten()
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations })
        }
    }
}
