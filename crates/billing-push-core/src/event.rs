//! Push event abstraction layer (SBIO)
//!
//! This module defines the `PushEvent` trait that abstracts the host's push event.
//! The listener reads the payload and registers its wait-until obligation through
//! this trait without knowing which host delivered the event.
//!
//! # Implementations
//!
//! - `PushMessage`: owned in-process event (tests, preview binary)
//! - `WebPushEvent`: `web_sys::PushEvent` with `waitUntil` (WASM/browser)

use crate::error::PushResult;
use crate::surface::SurfaceResult;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Pending display request registered as a wait-until obligation
///
/// Not `Send`: the host drives it on the thread that dispatched the event.
pub type DisplayFuture = Pin<Box<dyn Future<Output = SurfaceResult<()>>>>;

/// Host push event
pub trait PushEvent {
    /// Raw payload bytes, or `None` when the push carried no data
    fn payload(&self) -> Option<Vec<u8>>;

    /// Keep the worker alive until `obligation` settles
    ///
    /// The host must drive the obligation to completion; its outcome is the
    /// outcome of the display request.
    fn wait_until(&self, obligation: DisplayFuture) -> PushResult<()>;
}

/// Owned push event
///
/// Stores the obligations registered by the listener so the caller can act as
/// the host and settle them.
#[derive(Default)]
pub struct PushMessage {
    data: Option<Vec<u8>>,
    obligations: RefCell<Vec<DisplayFuture>>,
}

impl PushMessage {
    /// Create an event without payload
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an event carrying `data`
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
            obligations: RefCell::new(Vec::new()),
        }
    }

    /// Number of obligations registered and not yet taken
    pub fn pending_obligations(&self) -> usize {
        self.obligations.borrow().len()
    }

    /// Hand the registered obligations to the caller
    pub fn take_obligations(&self) -> Vec<DisplayFuture> {
        self.obligations.take()
    }

    /// Drive every registered obligation to completion, in registration order
    pub async fn settle(&self) -> Vec<SurfaceResult<()>> {
        let mut outcomes = Vec::new();
        for obligation in self.take_obligations() {
            outcomes.push(obligation.await);
        }
        outcomes
    }
}

impl fmt::Debug for PushMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushMessage")
            .field("data", &self.data.as_ref().map(|d| String::from_utf8_lossy(d)))
            .field("pending_obligations", &self.pending_obligations())
            .finish()
    }
}

impl PushEvent for PushMessage {
    fn payload(&self) -> Option<Vec<u8>> {
        self.data.clone()
    }

    fn wait_until(&self, obligation: DisplayFuture) -> PushResult<()> {
        self.obligations.borrow_mut().push(obligation);
        Ok(())
    }
}
