use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{DiscoveryError, DiscoveryResult};

/// Collect sales files under `root`, depth-first, children in directory-listing order.
/// Walk errors (permission failures, dangling entries) abort the collection.
pub fn collect_sales_files(root: &Path, extension: &str) -> DiscoveryResult<Vec<PathBuf>> {
    let mut sales_files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                return Err(DiscoveryError::Walk { path, source: e });
            }
        };

        let path = entry.path();
        if crate::discovery::filter::is_sales_file(path, extension) {
            sales_files.push(path.to_path_buf());
        }
    }

    Ok(sales_files)
}
