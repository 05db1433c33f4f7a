//! Brand configuration
//!
//! Each deployment of the billing worker shows notifications under its own
//! title and logo. These constants are injected instead of baked into
//! per-deployment copies of the worker.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use url::Url;

const AS207960_TITLE: &str = "AS207960 Billing";
const AS207960_LOGO: &str = "https://as207960.net/img/logo.png";

/// Per-deployment notification branding
///
/// # Example
/// ```
/// use billing_push_core::BrandConfig;
///
/// // Same image for icon and badge
/// let brand = BrandConfig::new("Glauca Billing", "https://glauca.example/logo.png");
///
/// // Distinct monochrome badge
/// let brand = brand.with_badge("https://glauca.example/badge.png");
/// assert!(brand.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandConfig {
    /// Notification title
    pub title: String,
    /// Absolute URL of the notification icon
    pub icon: String,
    /// Absolute URL of the notification badge
    pub badge: String,
}

/// Wire shape of a brand config; `badge` falls back to `icon`
#[derive(Debug, Deserialize)]
struct BrandConfigInput {
    title: String,
    icon: String,
    #[serde(default)]
    badge: Option<String>,
}

impl BrandConfigInput {
    fn into_config(self) -> BrandConfig {
        let badge = self.badge.unwrap_or_else(|| self.icon.clone());
        BrandConfig {
            title: self.title,
            icon: self.icon,
            badge,
        }
    }
}

impl<'de> Deserialize<'de> for BrandConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        BrandConfigInput::deserialize(deserializer).map(BrandConfigInput::into_config)
    }
}

impl BrandConfig {
    /// Create a brand using one logo for both icon and badge
    pub fn new(title: impl Into<String>, logo_url: impl Into<String>) -> Self {
        let logo = logo_url.into();
        Self {
            title: title.into(),
            icon: logo.clone(),
            badge: logo,
        }
    }

    /// Use a different image for the badge
    pub fn with_badge(mut self, badge_url: impl Into<String>) -> Self {
        self.badge = badge_url.into();
        self
    }

    /// AS207960 deployment
    pub fn as207960() -> Self {
        Self::new(AS207960_TITLE, AS207960_LOGO)
    }

    /// Check that the brand can be shown by the platform
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "title",
                message: "must not be empty".to_string(),
            });
        }
        validate_absolute_url("icon", &self.icon)?;
        validate_absolute_url("badge", &self.badge)?;
        Ok(())
    }

    /// Parse and validate a JSON brand config
    ///
    /// Shape: `{ "title": string, "icon": string, "badge"?: string }`
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let config: BrandConfig =
            serde_json::from_slice(data).map_err(|e| ConfigError::InvalidParameter {
                name: "brand",
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Create from environment variables
    ///
    /// Reads from:
    /// - `BILLING_PUSH_TITLE`: Notification title
    /// - `BILLING_PUSH_ICON`: Icon URL (required when the title is set)
    /// - `BILLING_PUSH_BADGE`: Badge URL (defaults to the icon)
    ///
    /// Returns `Ok(None)` if no title is configured.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let Some(title) = lookup("BILLING_PUSH_TITLE") else {
            return Ok(None);
        };
        let icon = lookup("BILLING_PUSH_ICON").ok_or(ConfigError::MissingParameter {
            name: "BILLING_PUSH_ICON",
        })?;

        let mut config = Self::new(title.trim(), icon.trim());
        if let Some(badge) = lookup("BILLING_PUSH_BADGE") {
            config = config.with_badge(badge.trim());
        }

        config.validate()?;
        Ok(Some(config))
    }
}

fn validate_absolute_url(name: &'static str, raw: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidParameter {
        name,
        message: format!("invalid URL {:?}: {}", raw, e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidParameter {
            name,
            message: format!("expected an http(s) URL, got scheme {:?}", parsed.scheme()),
        });
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidParameter {
            name,
            message: format!("URL {:?} has no host", raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_as207960_preset() {
        let brand = BrandConfig::as207960();
        assert_eq!(brand.title, "AS207960 Billing");
        assert_eq!(brand.icon, "https://as207960.net/img/logo.png");
        assert_eq!(brand.badge, brand.icon);
        assert!(brand.validate().is_ok());
    }

    #[test]
    fn test_with_badge_keeps_icon() {
        let brand = BrandConfig::new("Glauca Billing", "https://glauca.example/logo.png")
            .with_badge("https://glauca.example/badge.png");
        assert_eq!(brand.icon, "https://glauca.example/logo.png");
        assert_eq!(brand.badge, "https://glauca.example/badge.png");
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let brand = BrandConfig::new("  ", "https://as207960.net/img/logo.png");
        assert_eq!(
            brand.validate(),
            Err(ConfigError::InvalidParameter {
                name: "title",
                message: "must not be empty".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_relative_urls() {
        for bad in ["/img/logo.png", "logo.png", "https://", "ftp://a/b", "data:image/png;base64,AA"] {
            let brand = BrandConfig::new("Billing", bad);
            assert!(
                matches!(
                    brand.validate(),
                    Err(ConfigError::InvalidParameter { name: "icon", .. })
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_rejects_malformed_hosts() {
        for bad in [
            "https://exa mple.com/logo.png",
            "https://?x",
            "https://[::1/logo.png",
            "http://:99999/logo.png",
            "https://example.com:99999/logo.png",
        ] {
            let brand = BrandConfig::new("Billing", bad);
            assert!(
                matches!(
                    brand.validate(),
                    Err(ConfigError::InvalidParameter { name: "icon", .. })
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_accepts_ports_and_ip_hosts() {
        for good in [
            "https://billing.example:8443/img/logo.png",
            "http://[::1]/logo.png",
            "http://127.0.0.1/logo.png",
        ] {
            assert!(BrandConfig::new("Billing", good).validate().is_ok(), "{}", good);
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_icon() {
        let err = BrandConfig::from_json(br#"{"title":"T","icon":"https://exa mple.com/i.png"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "icon", .. }));
    }

    #[test]
    fn test_validate_checks_badge_separately() {
        let brand = BrandConfig::as207960().with_badge("badge.png");
        assert!(matches!(
            brand.validate(),
            Err(ConfigError::InvalidParameter { name: "badge", .. })
        ));
    }

    #[test]
    fn test_from_json_badge_defaults_to_icon() {
        let brand = BrandConfig::from_json(
            br#"{"title":"Glauca Billing","icon":"https://glauca.example/logo.png"}"#,
        )
        .unwrap();
        assert_eq!(brand.badge, "https://glauca.example/logo.png");
    }

    #[test]
    fn test_from_json_explicit_badge() {
        let brand = BrandConfig::from_json(
            br#"{"title":"T","icon":"https://a.example/i.png","badge":"https://a.example/b.png"}"#,
        )
        .unwrap();
        assert_eq!(brand.badge, "https://a.example/b.png");
    }

    #[test]
    fn test_from_json_missing_title() {
        let err = BrandConfig::from_json(br#"{"icon":"https://a.example/i.png"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "brand", .. }));
    }

    #[test]
    fn test_from_lookup_unset_title_is_none() {
        let config = BrandConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_from_lookup_requires_icon() {
        let err = BrandConfig::from_lookup(lookup_from(&[("BILLING_PUSH_TITLE", "Billing")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingParameter {
                name: "BILLING_PUSH_ICON"
            }
        );
    }

    #[test]
    fn test_from_lookup_full() {
        let config = BrandConfig::from_lookup(lookup_from(&[
            ("BILLING_PUSH_TITLE", " Glauca Billing "),
            ("BILLING_PUSH_ICON", "https://glauca.example/logo.png"),
            ("BILLING_PUSH_BADGE", "https://glauca.example/badge.png"),
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(config.title, "Glauca Billing");
        assert_eq!(config.icon, "https://glauca.example/logo.png");
        assert_eq!(config.badge, "https://glauca.example/badge.png");
    }
}
