//! Service Worker host implementation (WASM)
//!
//! Binds the push listener seams to the browser:
//! - `RegistrationSurface`: `ServiceWorkerRegistration.showNotification`
//! - `WebPushEvent`: `PushEvent.data` and `ExtendableEvent.waitUntil`

use async_trait::async_trait;
use billing_push_core::{
    DisplayFuture, NotificationDescriptor, NotificationSurface, PushError, PushEvent,
    PushResult, SurfaceError, SurfaceResult,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{NotificationOptions, ServiceWorkerRegistration};

/// Notification surface backed by the worker's registration
pub struct RegistrationSurface {
    registration: ServiceWorkerRegistration,
}

impl RegistrationSurface {
    pub fn new(registration: ServiceWorkerRegistration) -> Self {
        Self { registration }
    }
}

#[async_trait(?Send)]
impl NotificationSurface for RegistrationSurface {
    async fn show_notification(&self, descriptor: &NotificationDescriptor) -> SurfaceResult<()> {
        let options = notification_options(descriptor);

        let promise = self
            .registration
            .show_notification_with_options(&descriptor.title, &options)
            .map_err(rejected)?;

        JsFuture::from(promise).await.map_err(rejected)?;
        Ok(())
    }
}

/// Push event delivered to the service worker global scope
pub struct WebPushEvent {
    event: web_sys::PushEvent,
}

impl WebPushEvent {
    pub fn new(event: web_sys::PushEvent) -> Self {
        Self { event }
    }
}

impl PushEvent for WebPushEvent {
    fn payload(&self) -> Option<Vec<u8>> {
        self.event.data().map(|data| data.text().into_bytes())
    }

    fn wait_until(&self, obligation: DisplayFuture) -> PushResult<()> {
        // Settles with the display outcome so host diagnostics see rejections
        let promise = future_to_promise(async move {
            obligation
                .await
                .map(|()| JsValue::UNDEFINED)
                .map_err(|e| js_sys::Error::new(&e.to_string()).into())
        });

        self.event
            .wait_until(&promise)
            .map_err(|e| PushError::LifetimeExtension {
                message: describe_js_error(&e),
            })
    }
}

/// Build the `showNotification` options dictionary
pub(crate) fn notification_options(descriptor: &NotificationDescriptor) -> NotificationOptions {
    let options = NotificationOptions::new();
    options.set_body(&descriptor.body);
    options.set_icon(&descriptor.icon);
    options.set_badge(&descriptor.badge);
    options.set_require_interaction(descriptor.require_interaction);
    options
}

fn rejected(e: JsValue) -> SurfaceError {
    SurfaceError::Rejected {
        message: describe_js_error(&e),
    }
}

/// Readable text for a thrown JS value (Error, DOMException or plain string)
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(error.name()), String::from(error.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
