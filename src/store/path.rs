use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::error::{Result, StoreError};

/// Lexically normalise a path: drop `.` and fold `..` into the previous
/// component. `..` at the filesystem root stays at the root.
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Path of `item` inside the store, rejecting anything that leaves `root`.
pub(crate) fn item_path(root: &Path, item: &str, extension: &str) -> Result<PathBuf> {
    let path = clean_path(&root.join(format!("{}{}", item, extension)));
    if path == root || !path.starts_with(root) {
        warn!(root = %root.display(), item, "rejected item outside the password store");
        return Err(StoreError::InvalidPath(item.to_string()));
    }
    Ok(path)
}
