//! Command-line interface definition.
//!
//! One subcommand per router operation. `auth` is the only command that
//! talks to the router without a stored session; everything else resolves
//! the configured router from the credential store first.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "glinet",
    about = "Command-line client for the GL.iNet router local HTTP API",
    version
)]
pub struct Cli {
    /// Path to the credential store
    /// (defaults to <config-dir>/glinet/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authenticate against a router and store the session token
    Auth {
        /// Router address (host or IP); defaults to the factory address
        address: Option<String>,

        /// Router password; prompted interactively when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the router's public IP address
    PublicIp,

    /// Check that the internet is reachable from the router
    CheckInternet,

    /// List connected clients
    ClientsList,

    /// Show cellular modem status
    ModemInfo,

    /// Turn the modem on
    ModemOn,

    /// Turn the modem off
    ModemOff,

    /// Trigger modem auto-dial
    ModemAuto {
        /// Modem identifier
        #[arg(long, default_value = "1")]
        modem_id: String,

        /// USB bus the modem sits on
        #[arg(long, default_value = "1-1.2")]
        bus: String,
    },
}
