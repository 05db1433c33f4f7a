//! Test infrastructure for billing push handling
//!
//! Provides reusable notification surfaces and payload helpers for
//! listener tests, including display failure injection.

pub mod failing_surface;
pub mod helpers;
pub mod recording_surface;

pub use failing_surface::FailingSurface;
pub use helpers::{glauca_brand, message_payload, push_with_message};
pub use recording_surface::{DisplayLog, RecordingSurface};
