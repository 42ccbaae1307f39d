use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::enumerator::DEFAULT_QUEUE_CAPACITY;
use crate::error::{Result, StoreError};
use crate::types::CREDENTIAL_EXTENSION;

/// Environment variable overriding the store location
pub const STORE_DIR_ENV: &str = "PASSWORD_STORE_DIR";

/// Store directory name under the user's home
pub const DEFAULT_STORE_DIR: &str = ".password-store";

/// Disk store options.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Capacity of the site queue used while enumerating
    pub queue_capacity: usize,
    /// Extension carried by credential files
    pub extension: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            extension: CREDENTIAL_EXTENSION.to_string(),
        }
    }
}

impl StoreOptions {
    /// Create new store options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set queue capacity.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set credential file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

/// Unresolved store path from an optional override and a home directory.
///
/// An empty override counts as unset.
pub fn store_path_from(dir: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    match dir.filter(|d| !d.is_empty()) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => home
            .map(|home| home.join(DEFAULT_STORE_DIR))
            .ok_or_else(|| StoreError::ConfigError("home directory not found".to_string())),
    }
}

/// Store path from `PASSWORD_STORE_DIR`, falling back to `~/.password-store`,
/// with symlinks resolved.
pub fn default_store_path() -> Result<PathBuf> {
    let path = store_path_from(env::var_os(STORE_DIR_ENV), dirs::home_dir())?;
    resolve_store_path(&path)
}

/// Canonicalize a store root, following symlinks.
pub fn resolve_store_path(path: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(path).map_err(|e| {
        StoreError::ConfigError(format!(
            "cannot resolve password store {}: {}",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), resolved = %resolved.display(), "resolved password store");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreErrorKind;

    #[test]
    fn test_store_path_defaults_to_home() {
        let path = store_path_from(None, Some(PathBuf::from("/home/alice"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/alice/.password-store"));
    }

    #[test]
    fn test_empty_override_counts_as_unset() {
        let path =
            store_path_from(Some(OsString::new()), Some(PathBuf::from("/home/alice"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/alice/.password-store"));
    }

    #[test]
    fn test_override_wins() {
        let path = store_path_from(
            Some(OsString::from("/srv/store")),
            Some(PathBuf::from("/home/alice")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/srv/store"));
    }

    #[test]
    fn test_no_home_is_config_error() {
        let err = store_path_from(None, None).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Config);
    }

    #[test]
    fn test_resolve_follows_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();

        #[cfg(unix)]
        {
            let link = dir.path().join("link");
            std::os::unix::fs::symlink(&real, &link).unwrap();
            let resolved = resolve_store_path(&link).unwrap();
            assert_eq!(resolved, fs::canonicalize(&real).unwrap());
        }

        let resolved = resolve_store_path(&real).unwrap();
        assert_eq!(resolved, fs::canonicalize(&real).unwrap());
    }

    #[test]
    fn test_resolve_missing_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_store_path(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Config);
    }

    #[test]
    fn test_options_builder() {
        let options = StoreOptions::new()
            .with_queue_capacity(8)
            .with_extension(".age");
        assert_eq!(options.queue_capacity, 8);
        assert_eq!(options.extension, ".age");

        let defaults = StoreOptions::default();
        assert_eq!(defaults.queue_capacity, DEFAULT_QUEUE_CAPACITY);
        assert_eq!(defaults.extension, ".gpg");
    }
}
