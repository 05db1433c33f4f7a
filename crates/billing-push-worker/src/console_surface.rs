//! Console notification surface (native)
//!
//! Writes each display request as one JSON line instead of showing it.
//! Used by `billing-push-preview` to check what a payload would produce.

use async_trait::async_trait;
use billing_push_core::{NotificationDescriptor, NotificationSurface, SurfaceError, SurfaceResult};
use std::io::{self, Write};
use std::sync::Mutex;

/// Surface printing descriptors as JSON lines
pub struct ConsoleSurface {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSurface {
    /// Print to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Print to any writer
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }
}

#[async_trait]
impl NotificationSurface for ConsoleSurface {
    async fn show_notification(&self, descriptor: &NotificationDescriptor) -> SurfaceResult<()> {
        let line = serde_json::to_string(descriptor).map_err(|e| SurfaceError::Rejected {
            message: format!("Serialization error: {}", e),
        })?;

        let mut out = self.out.lock().map_err(|_| SurfaceError::Unavailable)?;
        writeln!(out, "{}", line)
            .and_then(|()| out.flush())
            .map_err(|e| SurfaceError::Rejected {
                message: format!("Write error: {}", e),
            })?;

        tracing::info!(title = %descriptor.title, "Notification rendered");
        Ok(())
    }
}
