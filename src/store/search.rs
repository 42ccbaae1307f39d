use std::path::Path;

use glob::Pattern;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Glob the store for items whose domain directory or file name starts with
/// `query`.
///
/// Directory hits (`**/QUERY*/*EXT`) come first, file hits (`**/QUERY*EXT`)
/// after them. `query` is glob syntax; the root is matched literally.
pub(crate) fn search(root: &Path, query: &str, extension: &str) -> Result<Vec<String>> {
    let base = Pattern::escape(&root.to_string_lossy());
    let ext = Pattern::escape(extension);
    let patterns = [
        format!("{}/**/{}*/*{}", base, query, ext),
        format!("{}/**/{}*{}", base, query, ext),
    ];

    let mut items = Vec::new();
    for pattern in &patterns {
        for path in glob::glob(pattern)? {
            items.push(to_item(root, &path?, extension)?);
        }
    }

    debug!(query, hits = items.len(), "searched password store");
    Ok(items)
}

/// Store item name for a matched path: relative to the root, extension trimmed
fn to_item(root: &Path, path: &Path, extension: &str) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| StoreError::InvalidPath(path.display().to_string()))?;
    let relative = relative.to_string_lossy();
    Ok(relative
        .strip_suffix(extension)
        .unwrap_or(&relative)
        .to_string())
}
