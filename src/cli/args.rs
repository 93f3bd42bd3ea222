//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::backend::NotificationBackend;
use crate::domain::config::AppConfig;

/// notigate - permission-aware desktop notifications
#[derive(Parser, Debug)]
#[command(name = "notigate")]
#[command(version)]
#[command(about = "Check notification permission and send desktop notifications")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification backend to use
    #[arg(long, value_name = "BACKEND", env = "NOTIGATE_BACKEND", global = true)]
    pub backend: Option<BackendArg>,

    /// Application name shown by the notification server
    #[arg(long, value_name = "NAME", global = true)]
    pub app_name: Option<String>,

    /// Notification expiry in milliseconds
    #[arg(short = 't', long = "timeout", value_name = "MS", global = true)]
    pub timeout_ms: Option<u32>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config overrides taken from command-line flags
    pub fn config_overrides(&self) -> AppConfig {
        AppConfig {
            app_name: self.app_name.clone(),
            backend: self
                .backend
                .map(|b| NotificationBackend::from(b).to_string()),
            icon: None,
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the current notification permission
    Status,
    /// Ask for notification permission
    Request,
    /// Send a notification, asking for permission first if needed
    Send {
        /// Notification title
        title: String,
        /// Notification body
        #[arg(short = 'b', long)]
        body: Option<String>,
        /// Icon name or image path
        #[arg(short = 'i', long, value_name = "ICON")]
        icon: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    NotifyRust,
    NotifySend,
}

impl From<BackendArg> for NotificationBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::NotifyRust => NotificationBackend::NotifyRust,
            BackendArg::NotifySend => NotificationBackend::NotifySend,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "backend", "icon", "timeout_ms"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
