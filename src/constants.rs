//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_PRODUCT_CREATED: &str = "✅ Product created";
pub const SUCCESS_PRODUCT_UPDATED: &str = "✅ Product updated";
pub const SUCCESS_PRODUCT_DELETED: &str = "✅ Product deleted";

// Error Messages
pub const ERROR_PRODUCT_CREATE_FAILED: &str = "❌ Failed to create product";
pub const ERROR_PRODUCT_UPDATE_FAILED: &str = "❌ Failed to update product";
pub const ERROR_PRODUCT_DELETE_FAILED: &str = "❌ Failed to delete product";

/// Message shown for failures that carry no usable detail
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Toast display windows
/// How long a success toast stays visible, in milliseconds
pub const TOAST_SUCCESS_MS: u64 = 2000;
/// How long an error toast stays visible, in milliseconds
pub const TOAST_ERROR_MS: u64 = 3000;

// Catalog defaults and limits
/// Base URL of the remote product catalog
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
/// Maximum accepted product title length, in characters
pub const TITLE_MAX_LEN: usize = 100;
/// Smallest accepted product price
pub const MIN_PRICE: f64 = 0.01;
