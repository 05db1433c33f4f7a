//! Notification descriptor built for each displayed push

use crate::brand::BrandConfig;
use serde::Serialize;

/// Parameters handed to the platform's display capability
///
/// Created fresh per event. Once shown, the notification belongs to the
/// platform; dismissal is outside this crate's control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDescriptor {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    /// Keep the notification on screen until the user acts on it
    pub require_interaction: bool,
}

impl NotificationDescriptor {
    /// Build the descriptor for a message under the given brand
    ///
    /// The body is used verbatim: no sanitization, no truncation.
    pub fn for_message(brand: &BrandConfig, message: impl Into<String>) -> Self {
        Self {
            title: brand.title.clone(),
            body: message.into(),
            icon: brand.icon.clone(),
            badge: brand.badge.clone(),
            require_interaction: true,
        }
    }
}
