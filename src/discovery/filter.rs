use std::path::Path;

/// Return true if the path is a file whose extension matches `extension`
pub fn is_sales_file(path: &Path, extension: &str) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == extension)
}
