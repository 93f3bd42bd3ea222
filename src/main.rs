//! notigate CLI entry point

use std::process::ExitCode;

use clap::Parser;

use notigate::cli::{
    build_gateway, build_request, handle_config_command, init_logging, load_merged_config,
    run_request, run_send, run_status, Cli, Commands, Presenter, EXIT_ERROR,
};
use notigate::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = cli.config_overrides();

    match cli.command {
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Status => {
            let config = load_merged_config(overrides).await;
            run_status(&build_gateway(&config)).await
        }
        Commands::Request => {
            let config = load_merged_config(overrides).await;
            run_request(&build_gateway(&config)).await
        }
        Commands::Send { title, body, icon } => {
            let config = load_merged_config(overrides).await;
            let request = build_request(title, body, icon, &config);
            run_send(&build_gateway(&config), request).await
        }
    }
}
