pub mod cli;
pub mod commands;
pub mod display;
pub mod formats;
pub mod model;
pub mod runtime;
pub mod ui;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
