//! Domain layer - Core value objects
//!
//! Contains permission state, notification requests, configuration,
//! and domain errors. This layer has no dependencies on external systems.

pub mod backend;
pub mod config;
pub mod error;
pub mod notification;
pub mod permission;

// Re-export common types
pub use backend::NotificationBackend;
pub use config::AppConfig;
pub use error::*;
pub use notification::{NotificationIcon, NotificationRequest};
pub use permission::{PermissionPrompt, PermissionQuery, PermissionState};
