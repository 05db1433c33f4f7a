//! Notification surface abstraction (SBIO)
//!
//! This module defines the `NotificationSurface` trait that abstracts the
//! platform's "display a notification" capability. The listener uses this trait
//! without knowing where the notification ends up.
//!
//! # Implementations
//!
//! - `RegistrationSurface`: `ServiceWorkerRegistration.showNotification` (WASM/browser)
//! - `ConsoleSurface`: prints the descriptor as JSON (native preview binary)
//! - `RecordingSurface` / `FailingSurface`: test doubles in the test harness

use crate::notification::NotificationDescriptor;
use async_trait::async_trait;
use thiserror::Error;

/// Display request errors
///
/// Permission and policy decisions belong to the host; these errors only
/// report what the host decided.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host rejected the display request (e.g. permission denied)
    #[error("Display request rejected: {message}")]
    Rejected { message: String },

    /// No notification capability is reachable from this context
    #[error("Notification surface unavailable")]
    Unavailable,
}

/// Convenience type alias for surface results
pub type SurfaceResult<T> = Result<T, SurfaceError>;

// Surface trait definition with platform-specific bounds
// On native: requires Send + Sync for thread safety
// On WASM: no Send/Sync since JavaScript is single-threaded

/// Abstract notification display interface (SBIO boundary)
///
/// The returned future settles when the platform has accepted or refused the
/// notification, mirroring the promise returned by `showNotification`.
#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
pub trait NotificationSurface: Send + Sync + 'static {
    /// Request display of a notification
    async fn show_notification(&self, descriptor: &NotificationDescriptor) -> SurfaceResult<()>;
}

/// WASM version of surface trait (no Send + Sync bounds)
#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
pub trait NotificationSurface: 'static {
    /// Request display of a notification
    async fn show_notification(&self, descriptor: &NotificationDescriptor) -> SurfaceResult<()>;
}
