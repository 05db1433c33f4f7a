//! Billing Push Core - push notification handling with no I/O dependencies
//!
//! This crate implements the behavior of the billing service worker's push
//! listener:
//! - Payload decoding (`{ "message": string }` JSON)
//! - Notification descriptor construction from injected brand constants
//! - Wait-until registration so the host keeps the worker alive until the
//!   display request settles
//!
//! # SBIO Architecture
//!
//! The crate never touches browser APIs. Displaying a notification goes through
//! the `NotificationSurface` trait and the incoming event through the `PushEvent`
//! trait; `billing-push-worker` provides the `web-sys` implementations.
//!
//! # Quick Start
//!
//! ```ignore
//! use billing_push_core::{BrandConfig, PushListener, PushMessage};
//!
//! let listener = PushListener::new(BrandConfig::as207960(), surface);
//! let event = PushMessage::with_data(br#"{"message":"Invoice #123 is due"}"#.to_vec());
//!
//! listener.on_push(&event)?;
//! for outcome in event.settle().await {
//!     outcome?;
//! }
//! ```

// Configure WASM tests to run in browser
#[cfg(all(target_arch = "wasm32", test))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub mod brand;
pub mod error;
pub mod event;
pub mod listener;
pub mod notification;
pub mod payload;
pub mod surface;

// Re-export commonly used types
pub use brand::BrandConfig;
pub use error::{ConfigError, PushError, PushResult};
pub use event::{DisplayFuture, PushEvent, PushMessage};
pub use listener::PushListener;
pub use notification::NotificationDescriptor;
pub use payload::PushPayload;
pub use surface::{NotificationSurface, SurfaceError, SurfaceResult};
