//! Anonymous visitor identity.
//!
//! The portal tags activity with a temporary visitor id created once per
//! device. Components receive an [`IdentityProvider`] and only read from it.

use crate::error::Result;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Source of a stable anonymous visitor id.
pub trait IdentityProvider: Send + Sync {
    /// The visitor id.
    fn visitor_id(&self) -> &str;
}

/// Visitor id persisted in a file, created on first use.
#[derive(Debug, Clone)]
pub struct FileIdentity {
    id: String,
    path: PathBuf,
}

impl FileIdentity {
    /// Read the id stored at `path`, or create and store a new UUID v4.
    ///
    /// A file that does not contain a valid UUID is replaced.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                if let Ok(id) = Uuid::parse_str(text.trim()) {
                    return Ok(Self {
                        id: id.to_string(),
                        path: path.to_path_buf(),
                    });
                }
                tracing::warn!(target: "lookahead::identity", path = %path.display(), "Replacing invalid visitor id");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let id = Uuid::new_v4().to_string();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &id)?;
        tracing::debug!(target: "lookahead::identity", path = %path.display(), "Created visitor id");
        Ok(Self {
            id,
            path: path.to_path_buf(),
        })
    }

    /// Where the id is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityProvider for FileIdentity {
    fn visitor_id(&self) -> &str {
        &self.id
    }
}

/// Fixed visitor id.
#[derive(Debug, Clone)]
pub struct StaticIdentity(String);

impl StaticIdentity {
    /// Wrap an id.
    pub fn new(id: impl Into<String>) -> Self {
        StaticIdentity(id.into())
    }
}

impl IdentityProvider for StaticIdentity {
    fn visitor_id(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_once_per_device() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("visitor-id");

        let first = FileIdentity::load_or_create(&path).unwrap();
        let second = FileIdentity::load_or_create(&path).unwrap();

        assert_eq!(first.visitor_id(), second.visitor_id());
        assert!(Uuid::parse_str(first.visitor_id()).is_ok());
    }

    #[test]
    fn test_invalid_contents_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visitor-id");
        std::fs::write(&path, "not-a-uuid").unwrap();

        let identity = FileIdentity::load_or_create(&path).unwrap();
        assert!(Uuid::parse_str(identity.visitor_id()).is_ok());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), identity.visitor_id());
    }

    #[test]
    fn test_identity_is_object_safe() {
        let provider: Box<dyn IdentityProvider> = Box::new(StaticIdentity::new("visitor-1"));
        assert_eq!(provider.visitor_id(), "visitor-1");
    }
}
