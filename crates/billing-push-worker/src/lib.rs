//! Billing Push Worker - platform adapters for the push listener
//!
//! This crate connects `billing-push-core` to real hosts:
//! - Browser service worker: `web-sys` push event and notification surface,
//!   exported to JavaScript as the `PushWorker` class (`wasm` feature)
//! - Native preview tool: runs a payload through the listener and prints the
//!   notification it would show (`native` feature)
//!
//! # Quick Start (Service Worker)
//!
//! ```javascript
//! importScripts('./billing_push_worker.js');
//!
//! const ready = wasm_bindgen('./billing_push_worker_bg.wasm').then(() =>
//!     new wasm_bindgen.PushWorker({
//!         title: 'Glauca Billing',
//!         icon: 'https://glauca.example/img/logo.png',
//!     })
//! );
//!
//! // Listeners must be registered during the worker's first evaluation
//! self.addEventListener('push', (event) => {
//!     event.waitUntil(ready.then((worker) => worker.handlePush(event)));
//! });
//! ```

// Configure WASM tests to run in browser
#[cfg(all(target_arch = "wasm32", test))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[cfg(feature = "native")]
pub mod console_surface;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod service_worker;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm_bindings;

// Re-export the listener API
pub use billing_push_core::{
    BrandConfig, NotificationDescriptor, NotificationSurface, PushError, PushEvent,
    PushListener, PushMessage,
};

#[cfg(feature = "native")]
pub use console_surface::ConsoleSurface;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use service_worker::{RegistrationSurface, WebPushEvent};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use wasm_bindings::PushWorker;
