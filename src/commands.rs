//! One handler per subcommand: resolve a session, call the firmware API,
//! render the result. Any error propagates out and aborts the process with
//! a non-zero status; there is no partial or continuation mode.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::api::ApiClient;
use crate::auth;
use crate::config::CredentialStore;
use crate::utils::{render_kv, render_table, truncate, yes_no};

/// Factory-default LAN address of GL.iNet devices.
const DEFAULT_ROUTER_ADDR: &str = "192.168.8.1";

/// Widest the Name column gets in the clients table.
const NAME_COLUMN_WIDTH: usize = 24;

/// `auth`: obtain a token from the router and persist the credential.
pub async fn auth(
    config_path: &Path,
    address: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let address = address.unwrap_or_else(|| DEFAULT_ROUTER_ADDR.to_string());
    let address = address.trim().to_string();
    if address.is_empty() {
        bail!("router address must not be empty");
    }

    println!("Address: '{}'", address);
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Enter password: ")
            .context("failed to read password from terminal")?,
    };
    let password = password.trim().to_string();

    let store = CredentialStore::load(config_path)?;
    auth::authenticate_and_persist(store, &address, &password, config_path).await?;

    println!("Authorization successful");
    Ok(())
}

/// `public-ip`
pub async fn public_ip(config_path: &Path) -> Result<()> {
    let response = client_for(config_path)?.public_ip().await?;
    println!("server IP: {}", response.server_ip);
    Ok(())
}

/// `check-internet`
pub async fn check_internet(config_path: &Path) -> Result<()> {
    let response = client_for(config_path)?.internet_reachable().await?;
    println!("reachable:   {}", yes_no(response.reachable));
    println!("reboot flag: {}", yes_no(response.reboot_flag));
    Ok(())
}

/// `clients-list`
pub async fn clients_list(config_path: &Path) -> Result<()> {
    let mut clients = client_for(config_path)?.clients().await?;

    // Online clients first
    clients.sort_by_key(|c| !c.online);

    let rows: Vec<Vec<String>> = clients
        .iter()
        .map(|c| {
            vec![
                c.ip.clone(),
                c.mac.clone(),
                yes_no(c.online).to_string(),
                c.iface.clone(),
                truncate(&c.name, NAME_COLUMN_WIDTH),
                yes_no(c.favorite).to_string(),
                yes_no(c.blocked).to_string(),
                c.online_time.clone(),
                c.alive.clone(),
            ]
        })
        .collect();

    print!(
        "{}",
        render_table(
            &["IP", "Mac", "Online", "Iface", "Name", "Favorite", "Blocked", "OnlineTime", "Alive"],
            &rows,
        )
    );
    Ok(())
}

/// `modem-info`
pub async fn modem_info(config_path: &Path) -> Result<()> {
    let info = client_for(config_path)?.modem_info().await?;

    if info.modems.is_empty() {
        println!("no modems reported");
        return Ok(());
    }

    for (i, modem) in info.modems.iter().enumerate() {
        let pairs = [
            ("ModemID", modem.modem_id.to_string()),
            ("Name", modem.name.clone()),
            ("Imei", modem.imei.clone()),
            ("Carrier", modem.carrier.clone()),
            ("Up", modem.up.clone()),
            ("SIMStatus", modem.sim_status.to_string()),
            ("Ports", modem.ports.join(", ")),
            ("DataPort", modem.data_port.clone()),
            ("ControlPort", modem.control_port.clone()),
            ("QmiPort", modem.qmi_port.clone()),
            ("Bus", modem.bus.clone()),
            ("HwVersion", modem.hw_version.clone()),
            ("SimNum", modem.sim_num.clone()),
            ("Mnc", modem.mnc.clone()),
            ("Mcc", modem.mcc.clone()),
            ("Operators", modem.operators.join(", ")),
        ];
        print!("{}", render_kv(&format!("#{}", i + 1), &pairs));
    }
    Ok(())
}

/// `modem-on` / `modem-off`
pub async fn modem_set(config_path: &Path, enabled: bool) -> Result<()> {
    client_for(config_path)?.set_modem_enabled(enabled).await?;
    println!("modem {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

/// `modem-auto`
pub async fn modem_auto(config_path: &Path, modem_id: &str, bus: &str) -> Result<()> {
    client_for(config_path)?
        .modem_auto_dial(modem_id, bus)
        .await?;
    println!("auto dial triggered");
    Ok(())
}

/// Bootstrap the authenticated client every non-`auth` command uses: load
/// the store, resolve the single configured router, attach its token.
fn client_for(config_path: &Path) -> Result<ApiClient> {
    let store = CredentialStore::load(config_path)?;
    let session = auth::resolve_session(&store)?;
    Ok(session.client()?)
}
