//! Data models for router firmware responses.
//!
//! Every endpoint's JSON shape is fixed and owned by the firmware; the
//! structs here mirror the wire field names with explicit `rename`
//! attributes where they differ from Rust naming.
//!
//! - `PublicIp`, `Reachability`: internet status
//! - `NetworkClient`: one connected LAN/WLAN client
//! - `Modem`: one cellular modem with its ports and SIM state

pub mod client;
pub mod internet;
pub mod modem;

pub use client::{ClientListResponse, NetworkClient};
pub use internet::{PublicIp, Reachability};
pub use modem::{Modem, ModemInfoResponse};
