//! Transient toast notifications.
//!
//! The controller never raises notifications itself; the UI layer calls
//! [`Notifier::show_success`] / [`Notifier::show_error`] after an operation
//! resolves, and the status bar renders whatever [`Notifier::current`]
//! returns. Toasts expire on their own: success after 2000 ms, error after
//! 3000 ms.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::constants::{TOAST_ERROR_MS, TOAST_SUCCESS_MS};

/// Visual kind of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    /// Rendered in the destructive style.
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    posted_at: Instant,
    duration: Duration,
}

impl Toast {
    fn new(message: String, kind: ToastKind, duration_ms: u64) -> Self {
        Self {
            message,
            kind,
            posted_at: Instant::now(),
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// How long this toast stays visible after being posted.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the display window has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= self.duration
    }
}

/// Shared notification service that can be cloned across the application.
#[derive(Clone)]
pub struct Notifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            toasts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Display a transient success notification.
    pub fn show_success(&self, message: impl Into<String>) {
        self.push(Toast::new(message.into(), ToastKind::Success, TOAST_SUCCESS_MS));
    }

    /// Display a transient error notification.
    pub fn show_error(&self, message: impl Into<String>) {
        self.push(Toast::new(message.into(), ToastKind::Error, TOAST_ERROR_MS));
    }

    fn push(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }

    /// The newest toast still inside its display window, pruning expired
    /// ones along the way.
    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.retain(|toast| !toast.is_expired());
            toasts.last().cloned()
        } else {
            None
        }
    }

    /// Drop all toasts, expired or not.
    pub fn clear(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.clear();
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
