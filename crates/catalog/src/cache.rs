//! Time-boxed JSON file cache.
//!
//! An entry is stored as `{"data": ..., "timestamp": ...}`. Entries older
//! than the lifetime, unreadable files and undecodable contents all count as
//! a miss.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use lookahead_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Serialize, Deserialize)]
struct Entry<T> {
    data: T,
    timestamp: DateTime<Utc>,
}

/// A single cached value persisted to a file.
#[derive(Debug, Clone)]
pub struct TimedCache<T> {
    path: PathBuf,
    ttl: Duration,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> TimedCache<T> {
    /// Cache at `path` whose entries live for `ttl`.
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
            _marker: PhantomData,
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached value, if present and fresh.
    pub fn load(&self) -> Option<T> {
        self.load_at(Utc::now())
    }

    /// Cached value as of `now`.
    pub fn load_at(&self, now: DateTime<Utc>) -> Option<T> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(
                    target: "lookahead::catalog",
                    path = %self.path.display(),
                    error = %e,
                    "Cache unreadable"
                );
                return None;
            }
        };
        let entry: Entry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(
                    target: "lookahead::catalog",
                    path = %self.path.display(),
                    error = %e,
                    "Cache corrupt, ignoring"
                );
                return None;
            }
        };
        let ttl = ChronoDuration::from_std(self.ttl).unwrap_or_else(|_| ChronoDuration::days(36_500));
        if now.signed_duration_since(entry.timestamp) >= ttl {
            tracing::debug!(target: "lookahead::catalog", "Cache expired");
            return None;
        }
        Some(entry.data)
    }

    /// Persist `data` stamped with the current time.
    pub fn store(&self, data: &T) -> Result<()> {
        self.store_at(data, Utc::now())
    }

    /// Persist `data` stamped with `timestamp`.
    pub fn store_at(&self, data: &T, timestamp: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let entry = Entry { data, timestamp };
        let body = serde_json::to_vec(&entry).map_err(|e| Error::Cache {
            reason: e.to_string(),
        })?;
        fs::write(&self.path, body)?;
        Ok(())
    }

    /// Remove the backing file. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
