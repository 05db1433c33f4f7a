//! Surface that records every display request in a shared log

use async_trait::async_trait;
use billing_push_core::{NotificationDescriptor, NotificationSurface, SurfaceResult};
use std::sync::{Arc, RwLock};

/// Display log shared between a surface and the test observing it
///
/// Cloning shares the same log, so a test can keep a handle after the
/// surface has been moved into a listener.
#[derive(Clone, Default)]
pub struct DisplayLog {
    shown: Arc<RwLock<Vec<NotificationDescriptor>>>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `RecordingSurface` writing to this log
    pub fn surface(&self) -> RecordingSurface {
        RecordingSurface { log: self.clone() }
    }

    /// Number of display requests issued so far
    pub fn count(&self) -> usize {
        self.shown.read().unwrap().len()
    }

    /// Snapshot of the recorded descriptors, in request order
    pub fn shown(&self) -> Vec<NotificationDescriptor> {
        self.shown.read().unwrap().clone()
    }

    pub(crate) fn record(&self, descriptor: &NotificationDescriptor) {
        self.shown.write().unwrap().push(descriptor.clone());
    }
}

/// Surface that accepts every display request
pub struct RecordingSurface {
    log: DisplayLog,
}

impl RecordingSurface {
    /// Surface with its own fresh log
    pub fn with_log() -> (Self, DisplayLog) {
        let log = DisplayLog::new();
        (log.surface(), log)
    }

    pub fn log(&self) -> &DisplayLog {
        &self.log
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl NotificationSurface for RecordingSurface {
    async fn show_notification(&self, descriptor: &NotificationDescriptor) -> SurfaceResult<()> {
        self.log.record(descriptor);
        Ok(())
    }
}
