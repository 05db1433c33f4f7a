//! WASM bindings for the service worker script
//!
//! This module exposes the push listener through wasm-bindgen so the worker's
//! JavaScript glue only has to forward `push` events.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! importScripts('./billing_push_worker.js');
//!
//! // The module loads asynchronously; every event waits for the same worker
//! const ready = wasm_bindgen('./billing_push_worker_bg.wasm').then(() =>
//!     new wasm_bindgen.PushWorker({
//!         title: 'Glauca Billing',
//!         icon: 'https://glauca.example/img/logo.png',
//!         badge: 'https://glauca.example/img/badge.png', // optional, defaults to icon
//!     })
//! );
//!
//! self.addEventListener('push', (event) => {
//!     event.waitUntil(ready.then((worker) => worker.handlePush(event)));
//! });
//! ```

use crate::service_worker::{RegistrationSurface, WebPushEvent};
use billing_push_core::{BrandConfig, PushListener};
use wasm_bindgen::prelude::*;
use web_sys::ServiceWorkerGlobalScope;

/// Push handler bound to one deployment's brand
#[wasm_bindgen]
pub struct PushWorker {
    listener: PushListener<RegistrationSurface>,
}

#[wasm_bindgen]
impl PushWorker {
    /// Create a worker from a brand config object
    ///
    /// # Arguments
    /// * `config` - `{ title: string, icon: string, badge?: string }`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PushWorker, JsValue> {
        let brand: BrandConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        brand
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        Self::with_brand(brand)
    }

    /// Create a worker with the AS207960 brand
    #[wasm_bindgen(js_name = as207960)]
    pub fn as207960() -> Result<PushWorker, JsValue> {
        Self::with_brand(BrandConfig::as207960())
    }

    /// Handle a `push` event
    ///
    /// Throws when the payload is not valid JSON; nothing is shown in that case.
    #[wasm_bindgen(js_name = handlePush)]
    pub fn handle_push(&self, event: web_sys::PushEvent) -> Result<(), JsValue> {
        self.listener
            .on_push(&WebPushEvent::new(event))
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Title shown on every notification
    #[wasm_bindgen(getter, js_name = brandTitle)]
    pub fn brand_title(&self) -> String {
        self.listener.brand().title.clone()
    }
}

impl PushWorker {
    fn with_brand(brand: BrandConfig) -> Result<PushWorker, JsValue> {
        // Initialize console_error_panic_hook for better error messages in browser
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let scope: ServiceWorkerGlobalScope = js_sys::global()
            .dyn_into()
            .map_err(|_| JsValue::from_str("PushWorker must be created inside a service worker"))?;

        let surface = RegistrationSurface::new(scope.registration());
        Ok(Self {
            listener: PushListener::new(brand, surface),
        })
    }
}
