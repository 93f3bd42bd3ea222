//! Command runners for the permission and send subcommands

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, NotificationService};
use crate::application::NotificationGateway;
use crate::domain::config::AppConfig;
use crate::domain::notification::{NotificationIcon, NotificationRequest};
use crate::infrastructure::{create_service, ServiceOptions, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Gateway over whichever backend the config selects
pub type DesktopGateway = NotificationGateway<Box<dyn NotificationService>>;

/// Install the env_logger backend for the `log` facade.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Merge defaults, config file, and CLI overrides (in increasing precedence)
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let file_config = XdgConfigStore::new().load_or_empty().await;
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Build the process-wide gateway for a resolved config
pub fn build_gateway(config: &AppConfig) -> DesktopGateway {
    let options = ServiceOptions {
        app_name: config.app_name_or_default().to_string(),
        timeout_ms: config.timeout_ms,
    };
    NotificationGateway::new(create_service(config.backend_or_default(), options))
}

/// Build a request, falling back to the configured icon
pub fn build_request(
    title: String,
    body: Option<String>,
    icon: Option<String>,
    config: &AppConfig,
) -> NotificationRequest {
    let mut request = NotificationRequest::new(title);
    request.body = body;
    request.icon = icon
        .as_deref()
        .and_then(NotificationIcon::from_setting)
        .or_else(|| config.icon());
    request
}

/// `notigate status`
pub async fn run_status<N: NotificationService>(gateway: &NotificationGateway<N>) -> ExitCode {
    let presenter = Presenter::new();
    let state = gateway.check_permission().await;
    presenter.permission(state);
    ExitCode::from(EXIT_SUCCESS)
}

/// `notigate request`
pub async fn run_request<N: NotificationService>(gateway: &NotificationGateway<N>) -> ExitCode {
    let mut presenter = Presenter::new();

    presenter.start_spinner("Waiting for notification permission...");
    let granted = gateway.request_notification_permission().await;

    if granted {
        presenter.spinner_success("Notification permission granted");
    } else {
        presenter.spinner_fail("Notification permission denied");
    }
    presenter.output(gateway.permission_granted().as_str());

    if granted {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// `notigate send`
pub async fn run_send<N: NotificationService>(
    gateway: &NotificationGateway<N>,
    request: NotificationRequest,
) -> ExitCode {
    let presenter = Presenter::new();

    if gateway.notify(&request).await {
        presenter.success(&format!("Sent \"{}\"", request.title));
        return ExitCode::from(EXIT_SUCCESS);
    }

    if gateway.permission_granted().is_granted() {
        presenter.error("Notification could not be delivered");
    } else {
        presenter.warn(&format!(
            "Notification permission is {}",
            gateway.permission_granted()
        ));
    }
    ExitCode::from(EXIT_ERROR)
}
