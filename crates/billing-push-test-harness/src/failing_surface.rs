//! Surface with configurable display failure injection

use crate::recording_surface::DisplayLog;
use async_trait::async_trait;
use billing_push_core::{
    NotificationDescriptor, NotificationSurface, SurfaceError, SurfaceResult,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Surface that records requests like `RecordingSurface` but can reject them
///
/// Set `reject_at` to a call count to reject that call and every later one.
/// Set to 0 to disable failure (default). `unavailable` switches the injected
/// error from `Rejected` to `Unavailable`.
pub struct FailingSurface {
    log: DisplayLog,
    /// Reject show_notification from this call number on (0 = never)
    pub reject_at: Arc<AtomicU64>,
    /// Report `Unavailable` instead of `Rejected`
    pub unavailable: Arc<AtomicBool>,
    calls: Arc<AtomicU64>,
}

impl FailingSurface {
    pub fn new(log: &DisplayLog) -> Self {
        Self {
            log: log.clone(),
            reject_at: Arc::new(AtomicU64::new(0)),
            unavailable: Arc::new(AtomicBool::new(false)),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Surface rejecting every request, as when permission is denied
    pub fn denying(log: &DisplayLog) -> Self {
        let surface = Self::new(log);
        surface.reject_at.store(1, Ordering::SeqCst);
        surface
    }

    pub fn clear_failures(&self) {
        self.reject_at.store(0, Ordering::SeqCst);
        self.unavailable.store(false, Ordering::SeqCst);
    }

    /// Number of display requests received, accepted or not
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    fn should_fail(&self) -> bool {
        let count = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let target = self.reject_at.load(Ordering::SeqCst);
        target != 0 && count >= target
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl NotificationSurface for FailingSurface {
    async fn show_notification(&self, descriptor: &NotificationDescriptor) -> SurfaceResult<()> {
        if self.should_fail() {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(SurfaceError::Unavailable);
            }
            return Err(SurfaceError::Rejected {
                message: "Injected show_notification failure".into(),
            });
        }
        self.log.record(descriptor);
        Ok(())
    }
}
