//! Notification service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationRequest;
use crate::domain::permission::{PermissionPrompt, PermissionQuery};

/// Errors from the OS notification facility
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("{0} not found")]
    ToolNotFound(String),

    #[error("Notification service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Failed to query notification permission: {0}")]
    PermissionQueryFailed(String),

    #[error("Failed to request notification permission: {0}")]
    PermissionPromptFailed(String),

    #[error("Failed to show notification: {0}")]
    DeliveryFailed(String),
}

/// Port for the OS notification facility
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Ask the OS for the current permission status without prompting.
    async fn query_permission(&self) -> Result<PermissionQuery, NotificationError>;

    /// Ask the user for permission.
    ///
    /// May show an OS dialog; the future stays pending until the user answers.
    async fn prompt_permission(&self) -> Result<PermissionPrompt, NotificationError>;

    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `request` - Title, optional body and optional icon
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn deliver(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed service types
#[async_trait]
impl NotificationService for Box<dyn NotificationService> {
    async fn query_permission(&self) -> Result<PermissionQuery, NotificationError> {
        self.as_ref().query_permission().await
    }

    async fn prompt_permission(&self) -> Result<PermissionPrompt, NotificationError> {
        self.as_ref().prompt_permission().await
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().deliver(request).await
    }
}
