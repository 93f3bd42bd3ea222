//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! or the `notify-send` tool as fallback.

mod notify_rust;
mod notify_send;

pub use self::notify_rust::NotifyRustService;
pub use self::notify_send::NotifySendService;

use crate::application::ports::NotificationService;
use crate::domain::backend::NotificationBackend;

/// Settings shared by every notification backend
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub app_name: String,
    pub timeout_ms: Option<u32>,
}

/// Create the notification service for the chosen backend
pub fn create_service(
    backend: NotificationBackend,
    options: ServiceOptions,
) -> Box<dyn NotificationService> {
    log::debug!("Using {} notification backend", backend);
    match backend {
        NotificationBackend::NotifyRust => Box::new(
            NotifyRustService::with_app_name(options.app_name).with_timeout_ms(options.timeout_ms),
        ),
        NotificationBackend::NotifySend => Box::new(
            NotifySendService::with_app_name(options.app_name).with_timeout_ms(options.timeout_ms),
        ),
    }
}
