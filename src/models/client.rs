// Allow dead code: response structs carry all wire fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Response from `/cgi-bin/api/client/list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientListResponse {
    pub clients: Vec<NetworkClient>,
}

/// One connected LAN/WLAN client as reported by the firmware.
///
/// Traffic counters come back as pre-formatted strings (e.g. "1.2 MB/s"),
/// not numbers; they are passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkClient {
    pub remote: bool,
    pub mac: String,
    pub favorite: bool,
    pub ip: String,
    pub up: String,
    pub down: String,
    pub total_up: String,
    pub total_down: String,
    pub qos_up: String,
    pub qos_down: String,
    pub blocked: bool,
    pub iface: String,
    pub name: String,
    pub online_time: String,
    pub alive: String,
    pub new_online: bool,
    pub online: bool,
    pub vendor: String,
    pub node: String,
}
