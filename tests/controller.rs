mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use catalogist::constants::UNKNOWN_ERROR_MESSAGE;
use catalogist::controller::{ControllerError, ProductController};

use common::{product, Failure, InMemoryBackend};

#[tokio::test]
async fn fetch_replaces_products_in_server_order() {
    let backend = Arc::new(InMemoryBackend::new(vec![
        product(1, "Backpack", 109.95, "men's clothing"),
        product(2, "T-Shirt", 22.3, "men's clothing"),
    ]));
    let mut controller = ProductController::new(backend.clone());

    controller.fetch_products().await;

    let ids: Vec<u64> = controller.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(!controller.is_loading());
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn fetch_failure_keeps_stale_products() {
    let backend = Arc::new(InMemoryBackend::new(vec![product(1, "Backpack", 109.95, "men's clothing")]));
    let mut controller = ProductController::new(backend.clone());

    controller.fetch_products().await;
    assert_eq!(controller.products().len(), 1);

    backend.fail_lists(Failure::Status(500));
    controller.fetch_products().await;

    // The previous list survives the failed refresh
    assert_eq!(controller.products().len(), 1);
    assert!(!controller.is_loading());
    let error = controller.error().expect("failure should be captured");
    assert!(matches!(error, ControllerError::Transport { .. }));
    assert!(error.to_string().contains("500"));
}

#[tokio::test]
async fn opaque_failures_collapse_to_unknown() {
    let backend = Arc::new(InMemoryBackend::new(Vec::new()));
    backend.fail_lists(Failure::Opaque);
    let mut controller = ProductController::new(backend.clone());

    controller.fetch_products().await;

    assert_eq!(controller.error(), Some(&ControllerError::Unknown));
    assert_eq!(controller.error().unwrap().to_string(), UNKNOWN_ERROR_MESSAGE);
}

#[tokio::test]
async fn delete_without_selection_is_a_no_op() {
    let backend = Arc::new(InMemoryBackend::new(vec![product(5, "Bracelet", 695.0, "jewelery")]));
    let mut controller = ProductController::new(backend.clone());
    controller.fetch_products().await;

    controller.delete_product(5).await;

    assert_eq!(backend.delete_calls.load(Ordering::SeqCst), 0);
    assert_eq!(controller.products().len(), 1);
    assert!(!controller.is_deleting());
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn delete_removes_selection_and_clears_it() {
    let backend = Arc::new(InMemoryBackend::new(vec![
        product(1, "Backpack", 109.95, "men's clothing"),
        product(3, "Jacket", 55.99, "men's clothing"),
    ]));
    let mut controller = ProductController::new(backend.clone());
    controller.fetch_products().await;

    let target = controller.products()[1].clone();
    controller.confirm_delete(target.clone());
    assert_eq!(controller.pending_delete(), Some(&target));

    controller.delete_product(target.id).await;

    assert!(controller.products().iter().all(|p| p.id != 3));
    assert!(controller.pending_delete().is_none());
    assert!(!controller.is_deleting());
    assert_eq!(backend.delete_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn delete_targets_the_selection_not_the_argument() {
    let backend = Arc::new(InMemoryBackend::new(vec![
        product(1, "Backpack", 109.95, "men's clothing"),
        product(3, "Jacket", 55.99, "men's clothing"),
    ]));
    let mut controller = ProductController::new(backend.clone());
    controller.fetch_products().await;

    let target = controller.products()[1].clone();
    controller.confirm_delete(target);

    // Mismatched argument: the selection (id 3) is what gets deleted
    controller.delete_product(1).await;

    assert!(controller.products().iter().any(|p| p.id == 1));
    assert!(controller.products().iter().all(|p| p.id != 3));
    assert_eq!(backend.remaining().iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
}

#[tokio::test]
async fn failed_delete_keeps_selection_for_retry() {
    let backend = Arc::new(InMemoryBackend::new(vec![product(3, "Jacket", 55.99, "men's clothing")]));
    let mut controller = ProductController::new(backend.clone());
    controller.fetch_products().await;

    let target = controller.products()[0].clone();
    controller.confirm_delete(target.clone());

    backend.fail_deletes(Failure::Status(502));
    controller.delete_product(target.id).await;

    assert!(controller.products().iter().any(|p| p.id == 3));
    assert_eq!(controller.pending_delete(), Some(&target));
    assert!(!controller.is_deleting());
    assert!(matches!(controller.error(), Some(ControllerError::Transport { .. })));

    // Retry succeeds once the backend recovers
    backend.clear_failures();
    controller.delete_product(target.id).await;
    assert!(controller.pending_delete().is_none());
    assert!(controller.products().is_empty());
}

#[tokio::test]
async fn confirm_delete_is_repeatable_and_cancel_is_idempotent() {
    let backend = Arc::new(InMemoryBackend::new(Vec::new()));
    let mut controller = ProductController::new(backend);

    let first = product(1, "Backpack", 109.95, "men's clothing");
    let second = product(2, "T-Shirt", 22.3, "men's clothing");

    controller.confirm_delete(first);
    controller.confirm_delete(second.clone());
    assert_eq!(controller.pending_delete(), Some(&second));

    controller.cancel_delete();
    assert!(controller.pending_delete().is_none());

    // Cancelling again, or without a prior selection, stays a no-op
    controller.cancel_delete();
    assert!(controller.pending_delete().is_none());
    assert!(controller.error().is_none());
}
