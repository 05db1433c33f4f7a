//! Push listener
//!
//! Reacts to one push event at a time:
//!
//! ```text
//! payload? ──no──▶ done (nothing shown)
//!    │yes
//!    ▼
//! parse JSON ──err──▶ PayloadFormat (nothing shown)
//!    │ok
//!    ▼
//! descriptor ──▶ surface.show_notification ──▶ event.wait_until(pending)
//! ```
//!
//! The listener holds no per-event state, so consecutive events are independent.

use crate::brand::BrandConfig;
use crate::error::PushResult;
use crate::event::{DisplayFuture, PushEvent};
use crate::notification::NotificationDescriptor;
use crate::payload::PushPayload;
use crate::surface::NotificationSurface;
use std::sync::Arc;

/// Turns push events into notification display requests
pub struct PushListener<S> {
    brand: BrandConfig,
    surface: Arc<S>,
}

impl<S> Clone for PushListener<S> {
    fn clone(&self) -> Self {
        Self {
            brand: self.brand.clone(),
            surface: Arc::clone(&self.surface),
        }
    }
}

impl<S: NotificationSurface> PushListener<S> {
    /// Create a listener that shows notifications under `brand` on `surface`
    pub fn new(brand: BrandConfig, surface: S) -> Self {
        Self::with_shared_surface(brand, Arc::new(surface))
    }

    /// Create a listener over a surface shared with the caller
    pub fn with_shared_surface(brand: BrandConfig, surface: Arc<S>) -> Self {
        Self { brand, surface }
    }

    pub fn brand(&self) -> &BrandConfig {
        &self.brand
    }

    /// Build the descriptor for a payload without displaying it
    ///
    /// `Ok(None)` when there is no payload.
    pub fn prepare(&self, payload: Option<&[u8]>) -> PushResult<Option<NotificationDescriptor>> {
        let Some(data) = payload else {
            return Ok(None);
        };

        let payload = PushPayload::parse(data).map_err(|e| {
            tracing::warn!(error = %e, bytes = data.len(), "Dropping push with malformed payload");
            e
        })?;

        Ok(Some(NotificationDescriptor::for_message(
            &self.brand,
            payload.message,
        )))
    }

    /// Handle a push event
    ///
    /// Registers exactly one wait-until obligation when a notification is
    /// requested and none otherwise. The obligation settles with the outcome of
    /// the display request.
    pub fn on_push<E: PushEvent + ?Sized>(&self, event: &E) -> PushResult<()> {
        let payload = event.payload();
        let Some(descriptor) = self.prepare(payload.as_deref())? else {
            tracing::debug!("Push event without payload, nothing to show");
            return Ok(());
        };

        tracing::debug!(title = %descriptor.title, "Requesting notification display");

        let surface = Arc::clone(&self.surface);
        let pending: DisplayFuture =
            Box::pin(async move { surface.show_notification(&descriptor).await });

        event.wait_until(pending)
    }
}
