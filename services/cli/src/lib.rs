mod cli;
mod commands;
mod config;
mod error;
mod loader;
mod telemetry;

pub use error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
