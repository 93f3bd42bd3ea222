//! Notification backend identifier

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// All available backends
pub const ALL_BACKENDS: &[NotificationBackend] =
    &[NotificationBackend::NotifyRust, NotificationBackend::NotifySend];

/// Which OS notification facility to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationBackend {
    /// notify-rust (D-Bus on Linux, native APIs on macOS/Windows)
    #[default]
    NotifyRust,
    /// `notify-send` subprocess
    NotifySend,
}

impl NotificationBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
        }
    }
}

impl FromStr for NotificationBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ALL_BACKENDS
            .iter()
            .copied()
            .find(|backend| backend.as_str() == normalized)
            .ok_or_else(|| InvalidBackendError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for NotificationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
