//! Notification request value objects

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Reference to an icon resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationIcon {
    /// Themed icon name (e.g. `dialog-information`)
    Named(String),
    /// Image file on disk
    Path(PathBuf),
}

impl NotificationIcon {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Parse a user-supplied icon setting; blank means no icon
    pub fn from_setting(s: &str) -> Option<Self> {
        if s.trim().is_empty() {
            return None;
        }
        s.parse().ok()
    }

    /// The string handed to the notification server
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Named(name) => name.as_str().into(),
            Self::Path(path) => path.to_string_lossy(),
        }
    }

    fn looks_like_path(s: &str) -> bool {
        s.starts_with('~') || s.starts_with('.') || s.contains(std::path::MAIN_SEPARATOR) || s.contains('/')
    }
}

impl FromStr for NotificationIcon {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if Self::looks_like_path(s) {
            Ok(Self::Path(expand_home(s)))
        } else {
            Ok(Self::Named(s.to_string()))
        }
    }
}

impl fmt::Display for NotificationIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn expand_home(s: &str) -> PathBuf {
    match s.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| Path::new(s).to_path_buf()),
        None => PathBuf::from(s),
    }
}

/// A notification to show. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: Option<String>,
    pub icon: Option<NotificationIcon>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            icon: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_icon(mut self, icon: NotificationIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}
