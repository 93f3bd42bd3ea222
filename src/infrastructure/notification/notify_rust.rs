//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. None of these backends expose a
//! permission dialog through notify-rust, so "permission" means the
//! notification server is reachable (freedesktop) or always granted
//! (macOS/Windows).

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationService};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::NotificationRequest;
use crate::domain::permission::{PermissionPrompt, PermissionQuery};

/// Cross-platform notification service using notify-rust
pub struct NotifyRustService {
    /// Application name for notifications
    app_name: String,
    /// Expiry in milliseconds, server default if None
    timeout_ms: Option<u32>,
}

impl NotifyRustService {
    /// Create a new notify-rust service
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            timeout_ms: None,
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::new()
        }
    }

    /// Set notification expiry
    pub fn with_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Check that a notification server is answering on the session bus
    #[cfg(all(unix, not(target_os = "macos")))]
    async fn probe_server() -> Result<(), String> {
        let info = tokio::task::spawn_blocking(notify_rust::get_server_information)
            .await
            .map_err(|e| format!("Task join error: {}", e))?
            .map_err(|e| e.to_string())?;

        log::debug!(
            "Notification server: {} {} ({})",
            info.name,
            info.version,
            info.vendor
        );
        Ok(())
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn probe_server() -> Result<(), String> {
        Ok(())
    }
}

impl Default for NotifyRustService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for NotifyRustService {
    async fn query_permission(&self) -> Result<PermissionQuery, NotificationError> {
        Self::probe_server()
            .await
            .map_err(NotificationError::ServiceUnavailable)?;
        Ok(PermissionQuery::Granted)
    }

    async fn prompt_permission(&self) -> Result<PermissionPrompt, NotificationError> {
        Self::probe_server()
            .await
            .map_err(NotificationError::PermissionPromptFailed)?;
        Ok(PermissionPrompt::Granted)
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let timeout_ms = self.timeout_ms;
        let request = request.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification.appname(&app_name).summary(&request.title);

            if let Some(body) = &request.body {
                notification.body(body);
            }
            if let Some(icon) = &request.icon {
                notification.icon(&icon.as_str());
            }
            if let Some(ms) = timeout_ms {
                notification.timeout(notify_rust::Timeout::Milliseconds(ms));
            }

            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::DeliveryFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_default_app_name() {
        let service = NotifyRustService::default();
        assert_eq!(service.app_name, "notigate");
        assert!(service.timeout_ms.is_none());
    }

    #[test]
    fn service_with_custom_app_name_and_timeout() {
        let service = NotifyRustService::with_app_name("Mail").with_timeout_ms(Some(4000));
        assert_eq!(service.app_name, "Mail");
        assert_eq!(service.timeout_ms, Some(4000));
    }
}
