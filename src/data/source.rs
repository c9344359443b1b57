use crate::cache::{Snapshot, SnapshotStore};
use crate::error::AppError;
use governor::{clock::DefaultClock, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use log::{debug, info, warn};
use std::fs;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

const MAX_RETRIES: u32 = 3;
const REQUESTS_PER_SECOND: NonZeroU32 = match NonZeroU32::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Something that can hand back the raw JSON text of a named dataset.
pub trait DataSource {
    fn describe(&self) -> String;

    fn fetch(&self, resource: &str) -> Result<String, AppError>;
}

/// Datasets stored as files in a local directory.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySource { dir: dir.into() }
    }
}

impl DataSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }

    fn fetch(&self, resource: &str) -> Result<String, AppError> {
        let path = self.dir.join(resource);
        debug!("reading {}", path.display());

        fs::read_to_string(&path).map_err(|source| AppError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Datasets served over HTTP under a common base URL.
pub struct HttpSource {
    base_url: String,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    snapshots: Option<SnapshotStore>,
    max_age_mins: u64,
    refresh: bool,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        HttpSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::direct(Quota::per_second(REQUESTS_PER_SECOND)),
            snapshots: None,
            max_age_mins: 0,
            refresh: false,
        }
    }

    /// Serve bodies younger than `max_age_mins` from `store`; `refresh` skips the lookup.
    pub fn with_snapshots(
        mut self,
        store: SnapshotStore,
        max_age_mins: u64,
        refresh: bool,
    ) -> Self {
        self.snapshots = Some(store);
        self.max_age_mins = max_age_mins;
        self.refresh = refresh;
        self
    }

    pub fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    fn fresh_snapshot(&self, resource: &str) -> Option<Snapshot> {
        if self.refresh {
            return None;
        }

        let snapshot = self.snapshots.as_ref()?.load(resource)?;
        if snapshot.is_stale(self.max_age_mins) {
            debug!("snapshot for {} is stale", resource);
            None
        } else {
            Some(snapshot)
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            while self.rate_limiter.check().is_err() {
                thread::sleep(Duration::from_millis(50));
            }

            let response = ureq::get(url)
                .set("User-Agent", concat!("occ_stats/", env!("CARGO_PKG_VERSION")))
                .call();

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    warn!("rate limited by {}, waiting {}ms before retry", url, wait_ms);
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(code, _)) => {
                    return Err(AppError::HttpError(format!("{} returned status {}", url, code)));
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    fn fetch(&self, resource: &str) -> Result<String, AppError> {
        if let Some(snapshot) = self.fresh_snapshot(resource) {
            info!("using snapshot of {} from {}", resource, snapshot.fetched_at);
            return Ok(snapshot.body);
        }

        let url = self.url_for(resource);
        info!("fetching {}", url);
        let body = self.execute_request(&url)?;

        if let Some(store) = &self.snapshots {
            if let Err(e) = store.save(&Snapshot::new(resource, body.clone())) {
                warn!("could not persist snapshot of {}: {}", resource, e);
            }
        }

        Ok(body)
    }
}
