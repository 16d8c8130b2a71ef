//! Sales file discovery module

pub mod filter;
pub mod walker;

use std::path::{Path, PathBuf};

use crate::error::{DiscoveryError, DiscoveryResult};

/// Find all sales files under `root` at any depth whose extension matches `extension`.
///
/// Fails if the root does not exist or is not a directory. An empty tree
/// yields an empty list, not an error.
pub fn find_sales_files(root: &Path, extension: &str) -> DiscoveryResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(DiscoveryError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DiscoveryError::RootNotDirectory(root.to_path_buf()));
    }

    walker::collect_sales_files(root, extension)
}
