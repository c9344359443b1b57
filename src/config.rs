use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_CACHE_MAX_AGE_MINS: u64 = 60;

/// Where the tournament datasets come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataLocation {
    Directory(PathBuf),
    Remote(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub location: DataLocation,
    pub cache_max_age_mins: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let location = match env::var("OCC_DATA_URL") {
            Ok(url) if !url.trim().is_empty() => DataLocation::Remote(url),
            _ => DataLocation::Directory(PathBuf::from(
                env::var("OCC_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            )),
        };

        let cache_max_age_mins = match env::var("OCC_CACHE_MAX_AGE_MINS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "OCC_CACHE_MAX_AGE_MINS must be a whole number of minutes, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_CACHE_MAX_AGE_MINS,
        };

        Ok(Config {
            location,
            cache_max_age_mins,
        })
    }

    /// Command-line flags win over the environment. A base URL wins over a directory.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, base_url: Option<String>) -> Self {
        if let Some(dir) = data_dir {
            self.location = DataLocation::Directory(dir);
        }
        if let Some(url) = base_url {
            self.location = DataLocation::Remote(url);
        }
        self
    }
}
