use clap::Parser;
use contact_manager::prelude::{Cli, run_app};
use dotenv::dotenv;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv().ok();

    // Logs go to stderr so stdout only carries the table and prompts
    let filter =
        EnvFilter::try_from_env("CONTACTS_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run_app(cli) {
        eprintln!("Error: {err}");
        exit(1);
    }
}
