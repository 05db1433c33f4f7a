//! Billing push preview binary
//!
//! Runs one push payload through the same listener the service worker uses and
//! prints the notification it would show as a JSON line.
//!
//! # Usage
//!
//! ```text
//! billing-push-preview [PAYLOAD_FILE]
//! echo '{"message":"Invoice #123 is due"}' | billing-push-preview
//! ```
//!
//! Empty input is treated as a push without data. Any other input, including
//! whitespace, is delivered as the payload.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log level (default: info)
//! - `BILLING_PUSH_TITLE` - Notification title (default: AS207960 brand)
//! - `BILLING_PUSH_ICON` - Icon URL, required with `BILLING_PUSH_TITLE`
//! - `BILLING_PUSH_BADGE` - Badge URL (defaults to the icon)

use billing_push_worker::{BrandConfig, ConsoleSurface, PushListener, PushMessage};
use std::env;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize structured logging (stdout carries the rendered notification)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let brand = match BrandConfig::from_env() {
        Ok(Some(brand)) => brand,
        Ok(None) => {
            info!("BILLING_PUSH_TITLE not set, using AS207960 brand");
            BrandConfig::as207960()
        }
        Err(e) => {
            eprintln!("Invalid brand configuration: {}", e);
            std::process::exit(1);
        }
    };

    let source = env::args().nth(1);
    let data = match read_input(source.as_deref()).await {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to read payload: {}", e);
            std::process::exit(1);
        }
    };

    info!(title = %brand.title, bytes = data.len(), "Previewing push");

    let event = event_from_input(data);
    let listener = PushListener::new(brand, ConsoleSurface::stdout());

    if let Err(e) = listener.on_push(&event) {
        eprintln!("Push handling failed: {}", e);
        std::process::exit(1);
    }

    for outcome in event.settle().await {
        if let Err(e) = outcome {
            eprintln!("Display failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn read_input(path: Option<&str>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => tokio::fs::read(path).await,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Zero-length input stands for a push without data
fn event_from_input(data: Vec<u8>) -> PushMessage {
    if data.is_empty() {
        PushMessage::empty()
    } else {
        PushMessage::with_data(data)
    }
}
