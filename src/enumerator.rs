//! Store enumeration.
//!
//! Walks the store root and turns every first-level directory into a
//! [`Site`]. A directory is treated as a domain as soon as it is visited and
//! the walk never descends into it, so nested directories show up as users
//! of their first-level directory.
//!
//! The walk runs on a producer thread and hands sites over a bounded channel.
//! The producer's result is only inspected after the channel has been fully
//! drained, so a producer blocked on a full queue can always finish.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, StoreError};
use crate::types::{Site, CREDENTIAL_EXTENSION};

/// Default capacity of the site queue between walker and collector
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Walks a store root into a list of sites.
#[derive(Debug, Clone)]
pub struct Enumerator {
    root: PathBuf,
    extension: String,
    queue_capacity: usize,
}

impl Enumerator {
    /// Create a new enumerator for a store root
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: CREDENTIAL_EXTENSION.to_string(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Set the extension trimmed from user file names
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the site queue capacity (at least 1)
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Enumerate all sites, walking on a separate thread.
    ///
    /// Fails if the root or any domain directory cannot be read. Sites
    /// received before the failure are discarded.
    pub fn enumerate(&self) -> Result<Vec<Site>> {
        let extension = self.extension.clone();
        self.enumerate_with(move |dir| read_site(dir, &extension))
    }

    /// Enumerate on a separate thread, building each site with `read`.
    fn enumerate_with<R>(&self, read: R) -> Result<Vec<Site>>
    where
        R: FnMut(&Path) -> Result<Site> + Send + 'static,
    {
        debug!(root = %self.root.display(), "enumerating store");

        let (tx, rx) = mpsc::sync_channel(self.queue_capacity);
        let root = self.root.clone();

        let producer = thread::Builder::new()
            .name("store-walk".to_string())
            .spawn(move || walk(&root, read, |site| tx.send(site).is_ok()))?;

        let sites: Vec<Site> = rx.iter().collect();

        let walked = producer
            .join()
            .map_err(|_| StoreError::EnumerationError("store walker panicked".to_string()))?;
        self.finish(walked, sites)
    }

    /// Enumerate all sites, walking on Tokio's blocking pool.
    #[cfg(feature = "async")]
    pub async fn enumerate_async(&self) -> Result<Vec<Site>> {
        debug!(root = %self.root.display(), "enumerating store");

        let (tx, mut rx) = tokio::sync::mpsc::channel(self.queue_capacity);
        let root = self.root.clone();
        let extension = self.extension.clone();

        let producer = tokio::task::spawn_blocking(move || {
            walk(
                &root,
                |dir| read_site(dir, &extension),
                |site| tx.blocking_send(site).is_ok(),
            )
        });

        let mut sites = Vec::new();
        while let Some(site) = rx.recv().await {
            sites.push(site);
        }

        let walked = producer
            .await
            .map_err(|e| StoreError::EnumerationError(format!("store walker failed: {}", e)))?;
        self.finish(walked, sites)
    }

    fn finish(&self, walked: Result<()>, sites: Vec<Site>) -> Result<Vec<Site>> {
        match walked {
            Ok(()) => {
                debug!(root = %self.root.display(), sites = sites.len(), "enumerated store");
                Ok(sites)
            }
            Err(e) => {
                warn!(
                    root = %self.root.display(),
                    discarded = sites.len(),
                    error = %e,
                    "store enumeration failed"
                );
                Err(e)
            }
        }
    }
}

/// Walk `root`, emitting one site per first-level directory.
///
/// The walk stops at depth 1, so domain directories are only listed by
/// `read`. Stops early if `emit` returns false.
fn walk<R, F>(root: &Path, mut read: R, mut emit: F) -> Result<()>
where
    R: FnMut(&Path) -> Result<Site>,
    F: FnMut(Site) -> bool,
{
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        if !emit(read(entry.path())?) {
            break;
        }
    }

    Ok(())
}

/// Build a site from a domain directory's immediate children
fn read_site(dir: &Path, extension: &str) -> Result<Site> {
    let domain = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut users = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        users.push(trim_extension(&name, extension).to_string());
    }

    Ok(Site::new(domain, users))
}

fn trim_extension<'a>(name: &'a str, extension: &str) -> &'a str {
    name.strip_suffix(extension).unwrap_or(name)
}
