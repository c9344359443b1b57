use crate::error::AppError;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed datasets for one session, keyed by resource name.
///
/// Entries are never evicted or invalidated; a second request for the same
/// resource is answered from memory. Failed fetches are not stored.
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: HashMap<String, Value>,
}

impl SessionCache {
    pub fn new() -> Self {
        SessionCache {
            entries: HashMap::new(),
        }
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.entries.contains_key(resource)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_or_try_insert_with<F>(
        &mut self,
        resource: &str,
        fetch: F,
    ) -> Result<&Value, AppError>
    where
        F: FnOnce() -> Result<Value, AppError>,
    {
        if self.entries.contains_key(resource) {
            debug!("session cache hit: {}", resource);
        } else {
            let value = fetch()?;
            self.entries.insert(resource.to_string(), value);
        }

        Ok(&self.entries[resource])
    }
}

/// A dataset body fetched from a remote host, persisted between runs.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Snapshot {
    pub resource: String,
    pub fetched_at: DateTime<Utc>,
    pub body: String,
}

impl Snapshot {
    pub fn new(resource: &str, body: String) -> Self {
        Snapshot {
            resource: resource.to_string(),
            fetched_at: Utc::now(),
            body,
        }
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.num_minutes() >= max_age_mins as i64
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SnapshotStore { dir: dir.into() }
    }

    /// `~/.occ_stats/<host>` for the given base URL.
    pub fn for_base_url(base_url: &str) -> Self {
        let host: String = base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
            .collect();

        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".occ_stats")
            .join(host);

        SnapshotStore::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, resource: &str) -> PathBuf {
        self.dir.join(format!("{}.snapshot", resource))
    }

    pub fn load(&self, resource: &str) -> Option<Snapshot> {
        let path = self.path_for(resource);
        let content = fs::read_to_string(&path).ok()?;

        match serde_json::from_str(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                // Treat a corrupt snapshot as missing; it is overwritten on the next fetch
                warn!("ignoring unreadable snapshot {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<(), AppError> {
        let path = self.path_for(&snapshot.resource);
        let io_err = |source| AppError::Io {
            path: path.display().to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;

        let json = serde_json::to_string(snapshot).map_err(|e| {
            AppError::json(
                &snapshot.resource,
                format!("failed to serialize snapshot: {}", e),
            )
        })?;

        fs::write(&path, json).map_err(io_err)?;
        debug!("saved snapshot {}", path.display());

        Ok(())
    }
}
