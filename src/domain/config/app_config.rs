//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::backend::NotificationBackend;
use crate::domain::notification::NotificationIcon;

/// Default application name shown by the notification server
pub const DEFAULT_APP_NAME: &str = "notigate";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub backend: Option<String>,
    pub icon: Option<String>,
    pub timeout_ms: Option<u32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            backend: Some(NotificationBackend::default().to_string()),
            icon: None,
            timeout_ms: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            backend: other.backend.or(self.backend),
            icon: other.icon.or(self.icon),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
        }
    }

    /// Get app name, or the default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get backend as parsed NotificationBackend, or default if not set/invalid
    pub fn backend_or_default(&self) -> NotificationBackend {
        self.backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the default icon, if any
    pub fn icon(&self) -> Option<NotificationIcon> {
        self.icon.as_deref().and_then(NotificationIcon::from_setting)
    }
}
