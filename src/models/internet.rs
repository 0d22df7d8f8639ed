use serde::{Deserialize, Serialize};

/// Response from `/cgi-bin/api/internet/public_ip/get`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicIp {
    #[serde(rename = "serverip")]
    pub server_ip: String,
}

/// Response from `/cgi-bin/api/internet/reachable`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reachability {
    pub reachable: bool,
    #[serde(default)]
    pub reboot_flag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_public_ip_response() {
        let ip: PublicIp = serde_json::from_str(r#"{"serverip": "203.0.113.7"}"#).unwrap();
        assert_eq!(ip.server_ip, "203.0.113.7");
    }

    #[test]
    fn parses_reachability_response() {
        let r: Reachability =
            serde_json::from_str(r#"{"reachable": true, "reboot_flag": false}"#).unwrap();
        assert!(r.reachable);
        assert!(!r.reboot_flag);
    }
}
