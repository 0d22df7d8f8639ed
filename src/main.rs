//! glinet - a command-line client for the GL.iNet router local HTTP API.
//!
//! Authenticate once with `glinet auth`, then run read and control commands
//! against the stored session: public IP, internet reachability, connected
//! clients, and modem status/control.

mod api;
mod auth;
mod cli;
mod commands;
mod config;
mod models;
mod utils;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use config::CredentialStore;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g. RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => CredentialStore::default_path()?,
    };

    match cli.command {
        Commands::Auth { address, password } => {
            commands::auth(&config_path, address, password).await
        }
        Commands::PublicIp => commands::public_ip(&config_path).await,
        Commands::CheckInternet => commands::check_internet(&config_path).await,
        Commands::ClientsList => commands::clients_list(&config_path).await,
        Commands::ModemInfo => commands::modem_info(&config_path).await,
        Commands::ModemOn => commands::modem_set(&config_path, true).await,
        Commands::ModemOff => commands::modem_set(&config_path, false).await,
        Commands::ModemAuto { modem_id, bus } => {
            commands::modem_auto(&config_path, &modem_id, &bus).await
        }
    }
}
