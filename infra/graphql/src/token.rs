//! Persisted authentication token.
//!
//! The client reads the token before every request and sends it as a `Bearer`
//! credential. Stores keep it under a fixed key so other tools sharing the same
//! storage find it.

use crate::error::{ClientError, ClientErrorExt};
use gamma_domain::config::AUTH_TOKEN_KEY;
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use std::ffi::OsString;
use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const TEMP_SUFFIX: &str = ".tmp";

/// Where the auth token lives between requests.
pub trait TokenStore: Debug + Send + Sync {
    /// The stored token, if any.
    fn load(&self) -> Option<String>;

    /// Replaces the stored token.
    fn save(&self, token: &str) -> Result<(), ClientError>;

    /// Forgets the stored token.
    fn clear(&self) -> Result<(), ClientError>;
}

/// Process-local token storage.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        *self.token.write() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.token.write() = None;
        Ok(())
    }
}

/// Token storage backed by a JSON object file shared with other keys.
///
/// Only the entry under `key` is touched; unrelated entries survive writes.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
    lock: Mutex<()>,
}

impl FileTokenStore {
    /// Stores the token under [`AUTH_TOKEN_KEY`] in `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, AUTH_TOKEN_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self { path: path.into(), key: key.into(), lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Map<String, Value> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Map::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Token storage unreadable");
                return Map::new();
            },
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(entries)) => entries,
            _ => {
                warn!(path = %self.path.display(), "Token storage is not a JSON object, ignoring it");
                Map::new()
            },
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Creating token storage directory")?;
        }
        let raw = serde_json::to_vec_pretty(entries).context("Encoding token storage")?;

        // Renamed over the target so an interrupted write keeps the previous file intact.
        let temp = self.temp_path();
        {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&temp)
                .context("Creating temporary token storage")?;
            file.write_all(&raw).context("Writing token storage")?;
            file.sync_all().context("Syncing token storage")?;
        }
        fs::rename(&temp, &self.path).context("Replacing token storage")
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let _guard = self.lock.lock();
        self.read_entries().get(&self.key).and_then(Value::as_str).map(str::to_owned)
    }

    fn save(&self, token: &str) -> Result<(), ClientError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries();
        entries.insert(self.key.clone(), Value::String(token.to_owned()));
        self.write_entries(&entries)?;
        debug!(key = %self.key, "Auth token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries();
        if entries.remove(&self.key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
