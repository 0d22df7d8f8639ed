//! Credential store for router sessions.
//!
//! Stores one record per router address: the address itself, the password
//! used to authenticate, and the session token issued by the firmware's
//! login endpoint. The file lives at `~/.config/glinet/config.json` by
//! default; every operation takes the path explicitly so tests can run
//! against a temp directory.
//!
//! The password is stored in plaintext. The only mitigation is restrictive
//! file permissions (owner read/write on Unix).

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application name used for the config directory path
const APP_NAME: &str = "glinet";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// On-disk schema tag.
///
/// Any tag this build does not recognize fails the load outright; the layout
/// is never guessed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaVersion {
    #[serde(rename = "v1")]
    V1,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but is not valid JSON for the expected schema.
    /// There is no auto-repair; the user has to inspect or delete the file.
    #[error("config file {path} is corrupted; inspect it or delete it and re-run `glinet auth`: {source}")]
    CorruptConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file parsed but carries a schema tag this build does not support.
    #[error("unsupported config schema version {0:?}")]
    UnsupportedVersion(String),

    /// Zero or more than one stored router. Selecting among several routers
    /// is not implemented; the store must hold exactly one.
    #[error("expected exactly one stored router, found {0}; run `glinet auth` (or clean up the config file)")]
    AmbiguousSelection(usize),

    #[error("failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One stored router record. `addr` is the unique key within the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterCredential {
    pub addr: String,
    pub password: String,
    pub token: String,
}

/// The persisted mapping from router address to password and session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialStore {
    #[serde(rename = "v")]
    pub version: SchemaVersion,
    #[serde(default)]
    pub routers: Vec<RouterCredential>,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self {
            version: SchemaVersion::V1,
            routers: Vec::new(),
        }
    }
}

impl CredentialStore {
    /// Default store location: `<config_dir>/glinet/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not find a config directory")
        })?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Load the store from `path`.
    ///
    /// A missing file is an empty store at the current schema version, not an
    /// error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        let store: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::CorruptConfig {
                path: path.to_path_buf(),
                source,
            })?;

        if let SchemaVersion::Unknown(tag) = &store.version {
            return Err(ConfigError::UnsupportedVersion(tag.clone()));
        }

        Ok(store)
    }

    /// Replace the credential stored for the same address in place, keeping
    /// its position, or append a new record. Re-running `auth` against a
    /// router must refresh its token without accumulating stale duplicates.
    pub fn upsert(&mut self, credential: RouterCredential) {
        match self.routers.iter_mut().find(|r| r.addr == credential.addr) {
            Some(existing) => *existing = credential,
            None => self.routers.push(credential),
        }
    }

    /// Write the whole store to `path`, creating parent directories as
    /// needed. The content goes to a sibling temp file first and is renamed
    /// over the target, so the old file is never left partially overwritten.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Encode)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("json.tmp");
        write_private(&tmp, contents.as_bytes())?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            // Don't leave the sibling temp file behind
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// The sole stored credential. The store holding zero or several routers
    /// is `AmbiguousSelection` in both cases.
    pub fn resolve_single(&self) -> Result<&RouterCredential, ConfigError> {
        match self.routers.as_slice() {
            [only] => Ok(only),
            routers => Err(ConfigError::AmbiguousSelection(routers.len())),
        }
    }
}

/// Write `contents` to `path` readable and writable by the owner only.
/// The file holds a plaintext router password.
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    std::fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(addr: &str, password: &str, token: &str) -> RouterCredential {
        RouterCredential {
            addr: addr.to_string(),
            password: password.to_string(),
            token: token.to_string(),
        }
    }

    #[test]
    fn load_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(store.version, SchemaVersion::V1);
        assert!(store.routers.is_empty());
    }

    #[test]
    fn load_corrupt_file_fails_and_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CredentialStore::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::CorruptConfig { .. }));
        // The message has to point the user at the file
        assert!(err.to_string().contains("delete"));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn load_unknown_schema_version_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"v": "v2", "routers": []}"#).unwrap();

        let err = CredentialStore::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(tag) if tag == "v2"));
    }

    #[test]
    fn upsert_replaces_by_address_in_place() {
        let mut store = CredentialStore::default();
        store.upsert(credential("192.168.8.1", "old-pass", "old-token"));
        store.upsert(credential("10.0.0.1", "other", "other-token"));
        store.upsert(credential("192.168.8.1", "new-pass", "new-token"));

        assert_eq!(store.routers.len(), 2);
        // Position preserved
        assert_eq!(store.routers[0].addr, "192.168.8.1");
        assert_eq!(store.routers[0].password, "new-pass");
        assert_eq!(store.routers[0].token, "new-token");
        assert_eq!(store.routers[1], credential("10.0.0.1", "other", "other-token"));
    }

    #[test]
    fn upsert_appends_new_address() {
        let mut store = CredentialStore::default();
        store.upsert(credential("192.168.8.1", "a", "ta"));
        let before = store.routers.clone();

        store.upsert(credential("10.0.0.1", "b", "tb"));
        assert_eq!(store.routers.len(), before.len() + 1);
        assert_eq!(&store.routers[..before.len()], &before[..]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut store = CredentialStore::default();
        store.upsert(credential("192.168.8.1", "secret", "abc123"));
        store.upsert(credential("10.0.0.1", "other", "def456"));
        store.save(&path).unwrap();

        let reloaded = CredentialStore::load(&path).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut store = CredentialStore::default();
        store.upsert(credential("192.168.8.1", "secret", "first"));
        store.save(&path).unwrap();

        store.upsert(credential("192.168.8.1", "secret", "second"));
        store.save(&path).unwrap();

        let reloaded = CredentialStore::load(&path).unwrap();
        assert_eq!(reloaded.routers.len(), 1);
        assert_eq!(reloaded.routers[0].token, "second");
    }

    #[test]
    fn failed_save_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        // A directory at the target path makes the final rename fail
        std::fs::create_dir(&path).unwrap();

        assert!(CredentialStore::default().save(&path).is_err());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn save_restricts_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        CredentialStore::default().save(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn resolve_single_requires_exactly_one_router() {
        let mut store = CredentialStore::default();
        assert!(matches!(
            store.resolve_single(),
            Err(ConfigError::AmbiguousSelection(0))
        ));

        store.upsert(credential("192.168.8.1", "secret", "abc123"));
        let resolved = store.resolve_single().unwrap();
        assert_eq!(resolved.addr, "192.168.8.1");
        assert_eq!(resolved.token, "abc123");

        store.upsert(credential("10.0.0.1", "other", "def456"));
        assert!(matches!(
            store.resolve_single(),
            Err(ConfigError::AmbiguousSelection(2))
        ));
    }

    #[test]
    fn wire_format_matches_published_layout() {
        let mut store = CredentialStore::default();
        store.upsert(credential("192.168.8.1", "secret", "abc123"));

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&store).unwrap()).unwrap();
        assert_eq!(json["v"], "v1");
        assert_eq!(json["routers"][0]["addr"], "192.168.8.1");
        assert_eq!(json["routers"][0]["password"], "secret");
        assert_eq!(json["routers"][0]["token"], "abc123");
    }
}
