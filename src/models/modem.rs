// Allow dead code: response structs carry all wire fields for completeness
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Response from `/cgi-bin/api/modem/info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModemInfoResponse {
    pub passthrough: bool,
    pub hint_modify_wifi_channel: i64,
    pub modems: Vec<Modem>,
}

/// One cellular modem with its ports and SIM state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modem {
    pub ports: Vec<String>,
    pub modem_id: i64,
    pub data_port: String,
    pub control_port: String,
    pub qmi_port: String,
    pub name: String,
    #[serde(rename = "IMEI")]
    pub imei: String,
    pub bus: String,
    pub hw_version: String,
    pub sim_num: String,
    pub mnc: String,
    pub mcc: String,
    pub carrier: String,
    pub up: String,
    #[serde(rename = "SIM_status")]
    pub sim_status: i64,
    pub operators: Vec<String>,
}
