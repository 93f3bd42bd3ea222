//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the
//! subcommand runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    build_gateway, build_request, init_logging, load_merged_config, run_request, run_send,
    run_status, DesktopGateway, EXIT_ERROR, EXIT_SUCCESS,
};
pub use args::{BackendArg, Cli, Commands, ConfigAction};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
