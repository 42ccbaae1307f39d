//! Password store module.
//!
//! Looks up, searches and opens entries of a `pass`-style store laid out as
//! `<root>/<domain>/<user>.gpg`.

mod config;
mod path;
mod search;

pub use config::{
    default_store_path, resolve_store_path, store_path_from, StoreOptions, DEFAULT_STORE_DIR,
    STORE_DIR_ENV,
};

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::enumerator::Enumerator;
use crate::error::{Result, StoreError};
use crate::matcher::match_sites;
use crate::types::Site;

#[cfg(feature = "async")]
use async_trait::async_trait;

/// Password store interface.
pub trait Store: Send + Sync {
    /// Stored items relevant to `domain`, most specific domain first, as
    /// "domain/user" strings.
    fn lookup(&self, domain: &str) -> Result<Vec<String>>;

    /// Stored items whose domain directory or name starts with `query`.
    fn search(&self, query: &str) -> Result<Vec<String>>;

    /// Raw bytes of a stored item.
    fn open(&self, item: &str) -> Result<Box<dyn Read + Send>>;
}

/// Async password store interface.
#[cfg(feature = "async")]
#[async_trait]
pub trait AsyncStore: Send + Sync {
    /// Stored items relevant to `domain`, most specific domain first.
    async fn lookup(&self, domain: &str) -> Result<Vec<String>>;

    /// Stored items whose domain directory or name starts with `query`.
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

/// Password store backed by a directory tree.
///
/// Every lookup re-reads the tree, so entries added on disk show up on the
/// next call.
#[derive(Debug, Clone)]
pub struct DiskStore {
    path: PathBuf,
    options: StoreOptions,
}

impl DiskStore {
    /// Open the default store: `$PASSWORD_STORE_DIR`, or `~/.password-store`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_options(StoreOptions::default())
    }

    /// Open the default store with custom options.
    pub fn from_env_with_options(options: StoreOptions) -> Result<Self> {
        let path = default_store_path()?;
        Ok(Self { path, options })
    }

    /// Open a store at an explicit root.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(path, StoreOptions::default())
    }

    /// Open a store at an explicit root with custom options.
    pub fn with_options(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self> {
        let path = resolve_store_path(path.as_ref())?;
        Ok(Self { path, options })
    }

    /// Resolved store root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store options
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// All sites currently in the store
    pub fn sites(&self) -> Result<Vec<Site>> {
        self.enumerator().enumerate()
    }

    /// Sites relevant to `domain`, most specific first
    pub fn matching_sites(&self, domain: &str) -> Result<Vec<Site>> {
        Ok(match_sites(domain, self.sites()?))
    }

    fn enumerator(&self) -> Enumerator {
        Enumerator::new(&self.path)
            .with_extension(self.options.extension.as_str())
            .with_queue_capacity(self.options.queue_capacity)
    }
}

impl Store for DiskStore {
    fn lookup(&self, domain: &str) -> Result<Vec<String>> {
        let logins = flatten(self.matching_sites(domain)?);
        debug!(domain, logins = logins.len(), "looked up password store");
        Ok(logins)
    }

    fn search(&self, query: &str) -> Result<Vec<String>> {
        search::search(&self.path, query, &self.options.extension)
    }

    fn open(&self, item: &str) -> Result<Box<dyn Read + Send>> {
        let path = path::item_path(&self.path, item, &self.options.extension)?;
        match File::open(&path) {
            Ok(file) => {
                debug!(item, "opened password store item");
                Ok(Box::new(file))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(item.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(feature = "async")]
#[async_trait]
impl AsyncStore for DiskStore {
    async fn lookup(&self, domain: &str) -> Result<Vec<String>> {
        let sites = self.enumerator().enumerate_async().await?;
        let logins = flatten(match_sites(domain, sites));
        debug!(domain, logins = logins.len(), "looked up password store");
        Ok(logins)
    }

    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let root = self.path.clone();
        let query = query.to_string();
        let extension = self.options.extension.clone();
        tokio::task::spawn_blocking(move || search::search(&root, &query, &extension))
            .await
            .map_err(|e| StoreError::EnumerationError(format!("store search failed: {}", e)))?
    }
}

/// "domain/user" strings in site order, then user order within each site
fn flatten(sites: Vec<Site>) -> Vec<String> {
    sites.iter().flat_map(Site::logins).collect()
}
