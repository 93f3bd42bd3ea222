//! notify-send notification adapter

use std::io::{self, ErrorKind};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, NotificationService};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::NotificationRequest;
use crate::domain::permission::{PermissionPrompt, PermissionQuery};

const NOTIFY_SEND: &str = "notify-send";

/// notify-send notification adapter
pub struct NotifySendService {
    /// Application name for notifications
    app_name: String,
    /// Expiry in milliseconds, server default if None
    timeout_ms: Option<u32>,
}

impl NotifySendService {
    /// Create a new notify-send service
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

    /// Build the notify-send argument list for a request
    fn build_args(&self, request: &NotificationRequest) -> Vec<String> {
        let mut args = vec!["--app-name".to_string(), self.app_name.clone()];

        if let Some(icon) = &request.icon {
            args.push("--icon".to_string());
            args.push(icon.as_str().into_owned());
        }
        if let Some(ms) = self.timeout_ms {
            args.push("--expire-time".to_string());
            args.push(ms.to_string());
        }

        args.push(request.title.clone());
        if let Some(body) = &request.body {
            args.push(body.clone());
        }
        args
    }

    /// Whether the notify-send binary can be run at all
    async fn tool_available() -> io::Result<bool> {
        match Command::new(NOTIFY_SEND)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) => Ok(status.success()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn query_result(available: io::Result<bool>) -> Result<PermissionQuery, NotificationError> {
    match available {
        Ok(true) => Ok(PermissionQuery::Granted),
        Ok(false) => Ok(PermissionQuery::Unset),
        Err(e) => Err(NotificationError::PermissionQueryFailed(e.to_string())),
    }
}

fn prompt_result(available: io::Result<bool>) -> Result<PermissionPrompt, NotificationError> {
    match available {
        Ok(true) => Ok(PermissionPrompt::Granted),
        Ok(false) => Ok(PermissionPrompt::Denied),
        Err(e) => Err(NotificationError::PermissionPromptFailed(e.to_string())),
    }
}

impl Default for NotifySendService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for NotifySendService {
    async fn query_permission(&self) -> Result<PermissionQuery, NotificationError> {
        query_result(Self::tool_available().await)
    }

    async fn prompt_permission(&self) -> Result<PermissionPrompt, NotificationError> {
        prompt_result(Self::tool_available().await)
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let status = Command::new(NOTIFY_SEND)
            .args(self.build_args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    NotificationError::ToolNotFound(NOTIFY_SEND.to_string())
                } else {
                    NotificationError::DeliveryFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::DeliveryFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationIcon;

    #[test]
    fn args_for_title_only() {
        let service = NotifySendService::new();
        let args = service.build_args(&NotificationRequest::new("Hi"));
        assert_eq!(args, vec!["--app-name", "notigate", "Hi"]);
    }

    #[test]
    fn args_include_icon_timeout_and_body() {
        let service = NotifySendService::with_app_name("Mail").with_timeout_ms(Some(2500));
        let request = NotificationRequest::new("New mail")
            .with_body("3 unread")
            .with_icon(NotificationIcon::named("mail-unread"));

        let args = service.build_args(&request);
        assert_eq!(
            args,
            vec![
                "--app-name",
                "Mail",
                "--icon",
                "mail-unread",
                "--expire-time",
                "2500",
                "New mail",
                "3 unread",
            ]
        );
    }

    #[test]
    fn missing_tool_is_unset_or_denied() {
        assert!(matches!(query_result(Ok(false)), Ok(PermissionQuery::Unset)));
        assert!(matches!(prompt_result(Ok(false)), Ok(PermissionPrompt::Denied)));
        assert!(matches!(prompt_result(Ok(true)), Ok(PermissionPrompt::Granted)));
    }

    #[test]
    fn spawn_errors_are_wrapped_once() {
        let query = query_result(Err(io::Error::new(ErrorKind::PermissionDenied, "boom")))
            .unwrap_err();
        assert_eq!(query.to_string(), "Failed to query notification permission: boom");

        let prompt = prompt_result(Err(io::Error::new(ErrorKind::PermissionDenied, "boom")))
            .unwrap_err();
        assert_eq!(prompt.to_string(), "Failed to request notification permission: boom");
    }
}
