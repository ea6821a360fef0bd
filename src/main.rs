mod api;
mod campaign;
mod commands;
mod config;
mod error;
mod session;
mod stats;

use std::process::ExitCode;

use config::Config;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    config.init_logger();

    if let Err(err) = commands::run(&config).await {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
